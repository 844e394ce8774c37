//! Person-trip association handlers, exposed from both sides.

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
        model::association::PersonTrip,
        service::{association::PersonTripService, transaction::TxContext},
        state::AppState,
    },
};

pub async fn get_travellers(
    State(state): State<AppState>,
    Path(trip_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let travellers = PersonTripService::new(&state.db)
        .travellers_of(trip_id)
        .await?;

    Ok(Json(travellers))
}

pub async fn get_person_trips(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let trips = PersonTripService::new(&state.db)
        .trips_of(&username)
        .await?;

    Ok(Json(trips))
}

pub async fn traveller_exists(
    State(state): State<AppState>,
    Path((trip_id, username)): Path<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    let exists = PersonTripService::new(&state.db)
        .link_exists(&username, &trip_id)
        .await?;

    Ok(probe(exists))
}

pub async fn add_traveller(
    State(state): State<AppState>,
    Path((trip_id, username)): Path<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    PersonTripService::new(&state.db)
        .link(TxContext::New, username.clone(), trip_id)
        .await?;

    Ok(created(format!(
        "Person '{}' added to trip {}",
        username, trip_id
    )))
}

pub async fn remove_traveller(
    State(state): State<AppState>,
    Path((trip_id, username)): Path<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    PersonTripService::new(&state.db)
        .unlink(TxContext::New, username.clone(), trip_id)
        .await?;

    Ok(ok(format!(
        "Person '{}' removed from trip {}",
        username, trip_id
    )))
}

pub async fn search_person_trips(
    State(state): State<AppState>,
    JsonBody(criteria): JsonBody<SearchCriteria>,
) -> Result<impl IntoResponse, AppError> {
    let result = PersonTripService::new(&state.db)
        .search(&criteria, |model| PersonTrip::from_entity(model).into_dto())
        .await?;

    Ok(Json(result))
}

pub async fn count_person_trips(
    State(state): State<AppState>,
    JsonBody(criteria): JsonBody<SearchCriteria>,
) -> Result<impl IntoResponse, AppError> {
    let count = PersonTripService::new(&state.db)
        .search_count(&criteria)
        .await?;

    Ok(Json(CountDto { count }))
}
