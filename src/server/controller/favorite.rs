use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::MessageDto, favorite::FavoriteDto, user::FavoriteUserDto},
    server::{
        controller::util::extract::{AppJson, AppPath},
        error::Error,
        model::app::AppState,
        service::favorite::{FavoriteService, FavoriteTarget},
    },
};

pub static FAVORITE_TAG: &str = "favorite";

static FAVORITE_PLANET_CREATED: &str = "Favorite planet created successfully.";
static FAVORITE_CHARACTER_CREATED: &str = "Favorite character created successfully.";
static FAVORITE_DELETED: &str = "Favorite deleted successfully.";

/// List all favorites
///
/// Each favorite embeds its planet, character and user. An unset planet or character is `null`.
#[utoipa::path(
    get,
    path = "/favorite",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "All favorites", body = Vec<FavoriteDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_all_favorites(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db).get_all_favorites().await?;

    Ok((StatusCode::OK, Json(favorites)))
}

/// Get a single favorite
#[utoipa::path(
    get,
    path = "/favorite/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Favorite ID")),
    responses(
        (status = 200, description = "The favorite", body = FavoriteDto),
        (status = 404, description = "Favorite not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_favorite(
    State(state): State<AppState>,
    AppPath(favorite_id): AppPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite = FavoriteService::new(&state.db)
        .get_favorite(favorite_id)
        .await?;

    Ok((StatusCode::OK, Json(favorite)))
}

/// Add a planet to a user's favorites
#[utoipa::path(
    post,
    path = "/favorite/planet/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    request_body = FavoriteUserDto,
    responses(
        (status = 200, description = "Favorite created", body = MessageDto),
        (status = 404, description = "User or planet not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    AppPath(planet_id): AppPath<i32>,
    AppJson(payload): AppJson<FavoriteUserDto>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .add_favorite(payload.id, FavoriteTarget::Planet(planet_id))
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new(FAVORITE_PLANET_CREATED))))
}

/// Add a character to a user's favorites
#[utoipa::path(
    post,
    path = "/favorite/character/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    request_body = FavoriteUserDto,
    responses(
        (status = 200, description = "Favorite created", body = MessageDto),
        (status = 404, description = "User or character not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    AppPath(character_id): AppPath<i32>,
    AppJson(payload): AppJson<FavoriteUserDto>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .add_favorite(payload.id, FavoriteTarget::Character(character_id))
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(FAVORITE_CHARACTER_CREATED)),
    ))
}

/// Remove a planet from a user's favorites
///
/// Deletes one matching favorite. The user is identified by the `id` field of the body.
#[utoipa::path(
    delete,
    path = "/favorite/planet/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    request_body = FavoriteUserDto,
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 404, description = "User or favorite not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    AppPath(planet_id): AppPath<i32>,
    AppJson(payload): AppJson<FavoriteUserDto>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .remove_favorite(payload.id, FavoriteTarget::Planet(planet_id))
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new(FAVORITE_DELETED))))
}

/// Remove a character from a user's favorites
///
/// Deletes one matching favorite. The user is identified by the `id` field of the body.
#[utoipa::path(
    delete,
    path = "/favorite/character/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    request_body = FavoriteUserDto,
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 404, description = "User or favorite not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_favorite_character(
    State(state): State<AppState>,
    AppPath(character_id): AppPath<i32>,
    AppJson(payload): AppJson<FavoriteUserDto>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .remove_favorite(payload.id, FavoriteTarget::Character(character_id))
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new(FAVORITE_DELETED))))
}
