//! Error types for the Holocron server.
//!
//! All errors funnel into [`Error`], which implements `IntoResponse` so controllers can
//! return it directly with `?`. Catalog lookups that miss become `404` responses, malformed
//! requests become `4xx` responses, and anything else is logged and reported as a generic
//! `500`.

pub mod catalog;
pub mod config;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::MessageDto,
    server::error::{catalog::CatalogError, config::ConfigError},
};

/// Main error type for the Holocron server.
///
/// Aggregates the domain-specific error types and external library errors. `#[from]`
/// conversions allow the `?` operator to be used throughout the data, service and controller
/// layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A requested user, planet, character or favorite does not exist.
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Request body was well-formed JSON but failed a presence check.
    #[error("Invalid request: {0}")]
    ValidationError(String),
    /// Request body could not be read or deserialized.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
    /// Path parameter could not be parsed.
    #[error(transparent)]
    PathRejection(#[from] PathRejection),
    /// Internal error indicating a bug, such as a favorite whose user row is missing.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Failed presence check or unparsable path parameter
/// - 400/415/422 - Rejected JSON body, using the status chosen by axum
/// - 404 Not Found - Missing catalog records
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            Self::ValidationError(reason) => {
                tracing::debug!("Rejected request: {}", reason);

                (StatusCode::BAD_REQUEST, Json(MessageDto::new(reason))).into_response()
            }
            Self::JsonRejection(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection);

                (rejection.status(), Json(MessageDto::new(rejection.body_text()))).into_response()
            }
            Self::PathRejection(rejection) => {
                tracing::debug!("Rejected request path: {}", rejection);

                (rejection.status(), Json(MessageDto::new(rejection.body_text()))).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageDto::new("Internal server error")),
        )
            .into_response()
    }
}
