//! Airline staff association handlers.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::CountDto, search::SearchCriteria},
    server::{
        controller::{created, ok, probe, JsonBody},
        error::AppError,
        model::association::AirlineStaff,
        service::{association::AirlineStaffService, transaction::TxContext},
        state::AppState,
    },
};

/// People employed by the airline; `null` entries are links to deleted people.
pub async fn get_staff(
    State(state): State<AppState>,
    Path(airline_code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let staff = AirlineStaffService::new(&state.db)
        .staff_of(&airline_code)
        .await?;

    Ok(Json(staff))
}

pub async fn get_employers(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let airlines = AirlineStaffService::new(&state.db)
        .employers_of(&username)
        .await?;

    Ok(Json(airlines))
}

pub async fn staff_exists(
    State(state): State<AppState>,
    Path((airline_code, username)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let exists = AirlineStaffService::new(&state.db)
        .link_exists(&airline_code, &username)
        .await?;

    Ok(probe(exists))
}

pub async fn add_staff(
    State(state): State<AppState>,
    Path((airline_code, username)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    AirlineStaffService::new(&state.db)
        .link(TxContext::New, airline_code.clone(), username.clone())
        .await?;

    Ok(created(format!(
        "Person '{}' added to the staff of airline '{}'",
        username, airline_code
    )))
}

pub async fn remove_staff(
    State(state): State<AppState>,
    Path((airline_code, username)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    AirlineStaffService::new(&state.db)
        .unlink(TxContext::New, airline_code.clone(), username.clone())
        .await?;

    Ok(ok(format!(
        "Person '{}' removed from the staff of airline '{}'",
        username, airline_code
    )))
}

pub async fn search_staff(
    State(state): State<AppState>,
    JsonBody(criteria): JsonBody<SearchCriteria>,
) -> Result<impl IntoResponse, AppError> {
    let result = AirlineStaffService::new(&state.db)
        .search(&criteria, |model| AirlineStaff::from_entity(model).into_dto())
        .await?;

    Ok(Json(result))
}

pub async fn count_staff(
    State(state): State<AppState>,
    JsonBody(criteria): JsonBody<SearchCriteria>,
) -> Result<impl IntoResponse, AppError> {
    let count = AirlineStaffService::new(&state.db)
        .search_count(&criteria)
        .await?;

    Ok(Json(CountDto { count }))
}
