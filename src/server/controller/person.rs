use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::CountDto,
        person::{CreatePersonDto, UpdatePersonDto},
        search::SearchCriteria,
    },
    server::{
        controller::{created, ok, probe, JsonBody},
        error::AppError,
        model::person::{CreatePersonParam, UpdatePersonParam},
        service::{person::PersonService, transaction::TxContext},
        state::AppState,
    },
};

pub async fn get_persons(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let people = PersonService::new(&state.db).get_all().await?;

    Ok(Json(people))
}

pub async fn get_person(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let person = PersonService::new(&state.db).get(&username).await?;

    Ok(Json(person))
}

pub async fn person_exists(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let exists = PersonService::new(&state.db).exists(&username).await?;

    Ok(probe(exists))
}

pub async fn create_person(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreatePersonDto>,
) -> Result<impl IntoResponse, AppError> {
    let person = PersonService::new(&state.db)
        .create(TxContext::New, CreatePersonParam::from_dto(payload))
        .await?;

    Ok(created(format!("Person '{}' created", person.username)))
}

pub async fn update_person(
    State(state): State<AppState>,
    Path(username): Path<String>,
    JsonBody(payload): JsonBody<UpdatePersonDto>,
) -> Result<impl IntoResponse, AppError> {
    PersonService::new(&state.db)
        .update(TxContext::New, &username, UpdatePersonParam::from_dto(payload))
        .await?;

    Ok(ok(format!("Person '{}' updated", username)))
}

pub async fn delete_person(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    PersonService::new(&state.db)
        .delete(TxContext::New, &username)
        .await?;

    Ok(ok(format!("Person '{}' deleted", username)))
}

pub async fn search_persons(
    State(state): State<AppState>,
    JsonBody(criteria): JsonBody<SearchCriteria>,
) -> Result<impl IntoResponse, AppError> {
    let result = PersonService::new(&state.db).search(&criteria).await?;

    Ok(Json(result))
}

pub async fn count_persons(
    State(state): State<AppState>,
    JsonBody(criteria): JsonBody<SearchCriteria>,
) -> Result<impl IntoResponse, AppError> {
    let count = PersonService::new(&state.db)
        .search_count(&criteria)
        .await?;

    Ok(Json(CountDto { count }))
}
