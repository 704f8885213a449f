use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, Extension, Json};

use crate::model::api::RouteListDto;

pub static SITEMAP_TAG: &str = "sitemap";

/// List every route served by the API
///
/// The listing is generated from the OpenAPI document when the router is built.
#[utoipa::path(
    get,
    path = "/",
    tag = SITEMAP_TAG,
    responses(
        (status = 200, description = "Every documented route with its method", body = RouteListDto)
    ),
)]
pub async fn get_sitemap(Extension(listing): Extension<Arc<RouteListDto>>) -> impl IntoResponse {
    (StatusCode::OK, Json(listing.as_ref().clone()))
}
