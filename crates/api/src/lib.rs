//! Car rental API library.
//!
//! Exposes the application factory and configuration for integration tests.

pub mod app;
pub mod config;
pub mod error;
pub mod jobs;
pub mod middleware;
pub mod routes;
pub mod services;
