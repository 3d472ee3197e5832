//! Hackathon Server - REST API for hosting and joining hackathons
//!
//! This library provides the HTTP layer of the Open Hackathon platform:
//! organizers create hackathons, audit registrations and publish
//! environment templates; participants register, form teams and start
//! remote experiments.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: one module per group of resources, each bound to a path
//!   through the route registrar (thin layer)
//! - **Middleware**: guards for authentication, hackathon resolution and
//!   admin privilege, plus request logging
//! - **Services**: manager traits holding the business logic, with
//!   in-memory implementations
//! - **Models**: Domain models

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
