use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::MessageDto, catalog::CharacterDto},
    server::{
        controller::util::extract::AppPath, error::Error, model::app::AppState,
        service::catalog::CatalogService,
    },
};

pub static CHARACTER_TAG: &str = "character";

/// List all characters
#[utoipa::path(
    get,
    path = "/character",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "All characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_all_characters(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let characters = CatalogService::new(&state.db).get_all_characters().await?;

    Ok((StatusCode::OK, Json(characters)))
}

/// Get a single character
#[utoipa::path(
    get,
    path = "/character/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "The character", body = CharacterDto),
        (status = 404, description = "Character not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    AppPath(character_id): AppPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let character = CatalogService::new(&state.db)
        .get_character(character_id)
        .await?;

    Ok((StatusCode::OK, Json(character)))
}
