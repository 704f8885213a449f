use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user. The password is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: Option<String>,
    pub email: String,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Body of `POST /user`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

/// Body of the favorite create & delete endpoints, identifying the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct FavoriteUserDto {
    /// ID of the user owning the favorite
    pub id: i32,
}
