use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::MessageDto;

/// Lookup failures for catalog records, each rendered as a `404` with a message body.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("User ID {0} not found")]
    UserNotFound(i32),
    #[error("Planet ID {0} not found")]
    PlanetNotFound(i32),
    #[error("Character ID {0} not found")]
    CharacterNotFound(i32),
    /// No favorite with the given ID, or none matching the requested user and target
    #[error("Favorite for ID {0} not found")]
    FavoriteNotFound(i32),
}

impl CatalogError {
    /// Message returned to the client
    pub fn message(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "User not found",
            Self::PlanetNotFound(_) => "Planet not found",
            Self::CharacterNotFound(_) => "Character not found",
            Self::FavoriteNotFound(_) => "Favorite not found",
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (StatusCode::NOT_FOUND, Json(MessageDto::new(self.message()))).into_response()
    }
}
