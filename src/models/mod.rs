//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod admin;
pub mod certificate;
pub mod experiment;
pub mod file;
pub mod hackathon;
pub mod registration;
pub mod team;
pub mod template;
pub mod user;

pub use admin::*;
pub use certificate::*;
pub use experiment::*;
pub use file::*;
pub use hackathon::*;
pub use registration::*;
pub use team::*;
pub use template::*;
pub use user::*;
