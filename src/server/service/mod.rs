//! Service layer.
//!
//! Services combine repository lookups into the operations exposed by the controllers,
//! turning missing records into [`CatalogError`](crate::server::error::catalog::CatalogError)s
//! and assembling response DTOs. Every write runs in its own transaction committed once.

pub mod catalog;
pub mod favorite;
pub mod user;
