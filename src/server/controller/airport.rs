use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        airport::{CreateAirportDto, UpdateAirportDto},
        api::CountDto,
        search::SearchCriteria,
    },
    server::{
        controller::{created, ok, probe, JsonBody},
        error::AppError,
        model::airport::{AirportKey, CreateAirportParam, UpdateAirportParam},
        service::{airport::AirportService, transaction::TxContext},
        state::AppState,
    },
};

pub async fn get_airports(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let airports = AirportService::new(&state.db).get_all().await?;

    Ok(Json(airports))
}

pub async fn get_airport(
    State(state): State<AppState>,
    Path((icao, iata)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let airport = AirportService::new(&state.db)
        .get(&AirportKey::new(icao, iata))
        .await?;

    Ok(Json(airport))
}

pub async fn airport_exists(
    State(state): State<AppState>,
    Path((icao, iata)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let exists = AirportService::new(&state.db)
        .exists(&AirportKey::new(icao, iata))
        .await?;

    Ok(probe(exists))
}

/// Airlines with this airport as their home base.
pub async fn get_based_airlines(
    State(state): State<AppState>,
    Path((icao, iata)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let airlines = AirportService::new(&state.db)
        .airlines_based_at(&AirportKey::new(icao, iata))
        .await?;

    Ok(Json(airlines))
}

pub async fn create_airport(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateAirportDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateAirportParam::from_dto(payload);
    let key = param.key();

    AirportService::new(&state.db)
        .create(TxContext::New, param)
        .await?;

    Ok(created(format!("Airport '{}' created", key)))
}

pub async fn update_airport(
    State(state): State<AppState>,
    Path((icao, iata)): Path<(String, String)>,
    JsonBody(payload): JsonBody<UpdateAirportDto>,
) -> Result<impl IntoResponse, AppError> {
    let key = AirportKey::new(icao, iata);

    AirportService::new(&state.db)
        .update(TxContext::New, &key, UpdateAirportParam::from_dto(payload))
        .await?;

    Ok(ok(format!("Airport '{}' updated", key)))
}

pub async fn delete_airport(
    State(state): State<AppState>,
    Path((icao, iata)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let key = AirportKey::new(icao, iata);

    AirportService::new(&state.db)
        .delete(TxContext::New, &key)
        .await?;

    Ok(ok(format!("Airport '{}' deleted", key)))
}

pub async fn search_airports(
    State(state): State<AppState>,
    JsonBody(criteria): JsonBody<SearchCriteria>,
) -> Result<impl IntoResponse, AppError> {
    let result = AirportService::new(&state.db).search(&criteria).await?;

    Ok(Json(result))
}

pub async fn count_airports(
    State(state): State<AppState>,
    JsonBody(criteria): JsonBody<SearchCriteria>,
) -> Result<impl IntoResponse, AppError> {
    let count = AirportService::new(&state.db)
        .search_count(&criteria)
        .await?;

    Ok(Json(CountDto { count }))
}
