//! HealthIA daemon library - exposes modules for testing.

pub mod cli;
pub mod config;
pub mod error;
pub mod routes;
pub mod server;
