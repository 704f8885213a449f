//! Server application models: shared application state and database model aliases.

pub mod app;
pub mod db;
