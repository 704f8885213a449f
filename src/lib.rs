//! Holocron: a small catalog API over users, planets, characters and favorites.

pub mod model;
pub mod server;
