//! Error types and HTTP response handling.
//!
//! `AppError` is the error type of every service and controller. Business rule
//! violations all map to `400 Bad Request` with a `{ status, message }` body;
//! infrastructure failures are logged and answered with a generic 500.

pub mod config;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::StatusDto, server::error::config::ConfigError};

#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Failure binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A referenced record does not exist.
    ///
    /// # Fields
    /// - Message naming the missing key, e.g. `Provided airline 'XX' does not exist`
    #[error("{0}")]
    NotFound(String),

    /// The record or relation to create already exists.
    #[error("{0}")]
    Conflict(String),

    /// The request violates a business rule.
    #[error("{0}")]
    InvalidInput(String),
}

impl AppError {
    pub fn not_found(kind: &str, key: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("Provided {} '{}' does not exist", kind, key))
    }

    pub fn conflict(kind: &str, key: impl std::fmt::Display) -> Self {
        Self::Conflict(format!("{} '{}' already exists", capitalize(kind), key))
    }
}

/// A request body that is not valid JSON for the target type is a client error.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidInput(rejection.body_text())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Maps business errors to 400 and everything else to a logged 500.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) | Self::Conflict(msg) | Self::InvalidInput(msg) => (
                StatusCode::BAD_REQUEST,
                Json(StatusDto::new(StatusCode::BAD_REQUEST.as_u16(), msg)),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// The full error is logged; the client only sees a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(StatusDto::new(
                StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                "Internal server error",
            )),
        )
            .into_response()
    }
}
