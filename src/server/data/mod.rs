//! Repositories over the catalog tables.
//!
//! Each repository borrows any `ConnectionTrait` implementor, so the same code runs against
//! the pooled connection or inside a transaction opened by the service layer.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
