//! Test utilities for the Holocron workspace.
//!
//! Tests are set up in two phases. A [`TestBuilder`] declares the tables and seed records,
//! then `build()` returns a [`TestContext`] over an in-memory SQLite database with fixture
//! helpers for inserting further records during the test itself.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
