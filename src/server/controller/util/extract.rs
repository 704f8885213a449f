use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::Error;

/// JSON request body extractor rejecting with [`Error::JsonRejection`]
///
/// Missing or mistyped fields are reported as a JSON `{"message": ...}` body instead of
/// axum's plain text rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct AppJson<T>(pub T);

/// Path parameter extractor rejecting with [`Error::PathRejection`]
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct AppPath<T>(pub T);
