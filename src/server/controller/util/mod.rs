//! Utilities shared by the controllers.
//!
//! This module provides the request extractors whose rejections are rendered through the
//! application [`Error`](crate::server::error::Error) type.

pub mod extract;
