//! Server application core modules.
//!
//! This module contains all server-side functionality for the Holocron API: configuration,
//! HTTP routing, controllers, services, database repositories, and startup. It serves the
//! Star Wars planet and character catalog along with users and their favorites.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
