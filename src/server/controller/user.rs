use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::MessageDto,
        favorite::FavoriteDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        controller::util::extract::{AppJson, AppPath},
        error::Error,
        model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// List all users
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users, without passwords", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).get_all_users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Get a single user
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).get_user(user_id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Create a user
///
/// The password is stored but never returned.
#[utoipa::path(
    post,
    path = "/user",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "The created user", body = UserDto),
        (status = 400, description = "Blank email or password, or malformed JSON", body = MessageDto),
        (status = 422, description = "Missing or mistyped fields", body = MessageDto),
        (status = 500, description = "Internal server error, including an already registered email", body = MessageDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).create_user(payload).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// List the favorites of a user
#[utoipa::path(
    get,
    path = "/user/favorite/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Favorites of the user, possibly empty", body = Vec<FavoriteDto>),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorites = UserService::new(&state.db)
        .get_user_favorites(user_id)
        .await?;

    Ok((StatusCode::OK, Json(favorites)))
}
