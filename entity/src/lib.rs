//! SeaORM entities for the Holocron catalog.

pub mod prelude;

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
