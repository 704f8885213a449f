//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! Swagger UI is served at `/docs`, and the route listing served at `/` is derived from the
//! same OpenAPI document.

use std::sync::Arc;

use axum::{Extension, Router};
use tower::Layer;
use tower_http::{normalize_path::NormalizePathLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::{RouteDto, RouteListDto},
    server::{controller, model::app::AppState},
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /` - Route listing
/// - `GET /user`, `POST /user` - List and create users
/// - `GET /user/{id}` - Get a single user
/// - `GET /user/favorite/{id}` - List the favorites of a user
/// - `GET /planet`, `GET /planet/{id}` - Planet catalog
/// - `GET /character`, `GET /character/{id}` - Character catalog
/// - `GET /favorite`, `GET /favorite/{id}` - Favorites with embedded entities
/// - `POST /favorite/planet/{id}`, `DELETE /favorite/planet/{id}` - Add or remove a favorite planet
/// - `POST /favorite/character/{id}`, `DELETE /favorite/character/{id}` - Add or remove a favorite character
///
/// # OpenAPI Documentation
/// The OpenAPI specification is available at `/docs/openapi.json` and Swagger UI at `/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` with all routes registered, waiting for its state.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Star Wars catalog and favorites API"), tags(
        (name = controller::sitemap::SITEMAP_TAG, description = "Route listing"),
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet catalog routes"),
        (name = controller::character::CHARACTER_TAG, description = "Character catalog routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::sitemap::get_sitemap))
        .routes(routes!(
            controller::user::get_all_users,
            controller::user::create_user
        ))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(controller::planet::get_all_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::character::get_all_characters))
        .routes(routes!(controller::character::get_character))
        .routes(routes!(controller::favorite::get_all_favorites))
        .routes(routes!(controller::favorite::get_favorite))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::delete_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_character,
            controller::favorite::delete_favorite_character
        ))
        .split_for_parts();

    let listing = route_listing(&api);

    routes
        .layer(Extension(Arc::new(listing)))
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
}

/// Builds the complete application: routes with state, request tracing, and trailing slash
/// normalization.
///
/// Requests matching a route as sent are served directly, which keeps the `/docs/` Swagger UI
/// index reachable. Anything else is retried with its trailing slash trimmed, so `/user/` and
/// `/user` reach the same handler.
pub fn app(state: AppState) -> Router {
    let router = routes().with_state(state);
    let normalized = NormalizePathLayer::trim_trailing_slash().layer(router.clone());

    router
        .fallback_service(normalized)
        .layer(TraceLayer::new_for_http())
}

/// Flattens the documented paths into `(method, path)` pairs ordered by path, then method.
fn route_listing(api: &utoipa::openapi::OpenApi) -> RouteListDto {
    let mut routes: Vec<RouteDto> = api
        .paths
        .paths
        .iter()
        .flat_map(|(path, item)| {
            [
                ("GET", item.get.is_some()),
                ("POST", item.post.is_some()),
                ("PUT", item.put.is_some()),
                ("PATCH", item.patch.is_some()),
                ("DELETE", item.delete.is_some()),
            ]
            .into_iter()
            .filter(|(_, present)| *present)
            .map(move |(method, _)| RouteDto {
                method: method.to_string(),
                path: path.clone(),
            })
        })
        .collect();

    routes.sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.method.cmp(&b.method)));

    RouteListDto { routes }
}
