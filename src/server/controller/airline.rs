use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        airline::{CreateAirlineDto, UpdateAirlineDto},
        api::CountDto,
        search::SearchCriteria,
    },
    server::{
        controller::{created, ok, probe, JsonBody},
        error::AppError,
        model::airline::{CreateAirlineParam, UpdateAirlineParam},
        service::{airline::AirlineService, transaction::TxContext},
        state::AppState,
    },
};

pub async fn get_airlines(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let airlines = AirlineService::new(&state.db).get_all().await?;

    Ok(Json(airlines))
}

pub async fn get_airline(
    State(state): State<AppState>,
    Path(airline_code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let airline = AirlineService::new(&state.db).get(&airline_code).await?;

    Ok(Json(airline))
}

pub async fn airline_exists(
    State(state): State<AppState>,
    Path(airline_code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let exists = AirlineService::new(&state.db).exists(&airline_code).await?;

    Ok(probe(exists))
}

pub async fn create_airline(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateAirlineDto>,
) -> Result<impl IntoResponse, AppError> {
    let airline = AirlineService::new(&state.db)
        .create(TxContext::New, CreateAirlineParam::from_dto(payload))
        .await?;

    Ok(created(format!("Airline '{}' created", airline.airline_code)))
}

pub async fn update_airline(
    State(state): State<AppState>,
    Path(airline_code): Path<String>,
    JsonBody(payload): JsonBody<UpdateAirlineDto>,
) -> Result<impl IntoResponse, AppError> {
    AirlineService::new(&state.db)
        .update(
            TxContext::New,
            &airline_code,
            UpdateAirlineParam::from_dto(payload),
        )
        .await?;

    Ok(ok(format!("Airline '{}' updated", airline_code)))
}

pub async fn delete_airline(
    State(state): State<AppState>,
    Path(airline_code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AirlineService::new(&state.db)
        .delete(TxContext::New, &airline_code)
        .await?;

    Ok(ok(format!("Airline '{}' deleted", airline_code)))
}

pub async fn search_airlines(
    State(state): State<AppState>,
    JsonBody(criteria): JsonBody<SearchCriteria>,
) -> Result<impl IntoResponse, AppError> {
    let result = AirlineService::new(&state.db).search(&criteria).await?;

    Ok(Json(result))
}

pub async fn count_airlines(
    State(state): State<AppState>,
    JsonBody(criteria): JsonBody<SearchCriteria>,
) -> Result<impl IntoResponse, AppError> {
    let count = AirlineService::new(&state.db)
        .search_count(&criteria)
        .await?;

    Ok(Json(CountDto { count }))
}
