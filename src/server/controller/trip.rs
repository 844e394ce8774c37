use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::CountDto,
        search::SearchCriteria,
        trip::{CreateTripDto, UpdateTripDto},
    },
    server::{
        controller::{created, ok, probe, JsonBody},
        error::AppError,
        model::trip::{CreateTripParam, UpdateTripParam},
        service::{transaction::TxContext, trip::TripService},
        state::AppState,
    },
};

pub async fn get_trips(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let trips = TripService::new(&state.db).get_all().await?;

    Ok(Json(trips))
}

pub async fn get_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let trip = TripService::new(&state.db).get(trip_id).await?;

    Ok(Json(trip))
}

pub async fn trip_exists(
    State(state): State<AppState>,
    Path(trip_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let exists = TripService::new(&state.db).exists(trip_id).await?;

    Ok(probe(exists))
}

/// Creates a trip together with its plan and travellers in one transaction.
pub async fn create_trip(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateTripDto>,
) -> Result<impl IntoResponse, AppError> {
    let trip = TripService::new(&state.db)
        .create(TxContext::New, CreateTripParam::from_dto(payload))
        .await?;

    Ok(created(format!("Trip {} created", trip.trip_id)))
}

pub async fn update_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<i32>,
    JsonBody(payload): JsonBody<UpdateTripDto>,
) -> Result<impl IntoResponse, AppError> {
    TripService::new(&state.db)
        .update(TxContext::New, trip_id, UpdateTripParam::from_dto(payload))
        .await?;

    Ok(ok(format!("Trip {} updated", trip_id)))
}

pub async fn delete_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    TripService::new(&state.db)
        .delete(TxContext::New, trip_id)
        .await?;

    Ok(ok(format!("Trip {} deleted", trip_id)))
}

pub async fn search_trips(
    State(state): State<AppState>,
    JsonBody(criteria): JsonBody<SearchCriteria>,
) -> Result<impl IntoResponse, AppError> {
    let result = TripService::new(&state.db).search(&criteria).await?;

    Ok(Json(result))
}

pub async fn count_trips(
    State(state): State<AppState>,
    JsonBody(criteria): JsonBody<SearchCriteria>,
) -> Result<impl IntoResponse, AppError> {
    let count = TripService::new(&state.db).search_count(&criteria).await?;

    Ok(Json(CountDto { count }))
}
