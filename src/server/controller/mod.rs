//! HTTP handlers.
//!
//! Handlers convert DTOs into service parameters, call the service with a fresh
//! transaction context and wrap the outcome in the response envelopes of
//! [`crate::model::api`].

pub mod airline;
pub mod airport;
pub mod person;
pub mod staff;
pub mod traveller;
pub mod trip;

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};

use crate::{
    model::api::{DataDto, StatusDto},
    server::error::AppError,
};

/// JSON request body whose rejections are answered with the `{ status, message }`
/// envelope instead of axum's plain-text response.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        Ok(Self(value))
    }
}

pub(crate) fn created(message: String) -> (StatusCode, Json<StatusDto>) {
    (
        StatusCode::CREATED,
        Json(StatusDto::new(StatusCode::CREATED.as_u16(), message)),
    )
}

pub(crate) fn ok(message: String) -> (StatusCode, Json<StatusDto>) {
    (
        StatusCode::OK,
        Json(StatusDto::new(StatusCode::OK.as_u16(), message)),
    )
}

pub(crate) fn probe(exists: bool) -> Json<DataDto<bool>> {
    Json(DataDto {
        status: StatusCode::OK.as_u16(),
        data: exists,
    })
}
