//! HTTP controller endpoints for the Holocron API.
//!
//! One Axum handler per resource and verb. Controllers extract the request, call into the
//! service layer and return JSON responses, with every endpoint documented through utoipa.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod sitemap;
pub mod user;
pub mod util;
