//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate, used across the data and
//! service layers.

/// A catalog user. `email` is unique, `password` never leaves the server.
pub type UserModel = entity::user::Model;

pub type PlanetModel = entity::planet::Model;

pub type CharacterModel = entity::character::Model;

/// A user's favorite, referencing a planet and/or a character by ID.
pub type FavoriteModel = entity::favorite::Model;
