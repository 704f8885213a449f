use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A plain message response, used for both confirmations and errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    /// The message
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A single entry of the route listing served at `/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RouteDto {
    pub method: String,
    pub path: String,
}

/// Listing of every route the API serves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RouteListDto {
    pub routes: Vec<RouteDto>,
}
