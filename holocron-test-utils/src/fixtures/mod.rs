//! Test fixture modules for database record creation.
//!
//! - `catalog` - planets and characters
//! - `user` - users and their favorites
//! - `factory` - in-memory models that never touch the database

pub mod catalog;
pub mod factory;
pub mod user;
