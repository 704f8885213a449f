use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    catalog::{CharacterDto, PlanetDto},
    user::UserDto,
};

/// A favorite with its planet, character and owning user embedded.
///
/// `planet` or `character` is `null` when the favorite does not reference one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub planet: Option<PlanetDto>,
    pub character: Option<CharacterDto>,
    pub user: UserDto,
}
