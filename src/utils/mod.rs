//! Utility functions

pub mod crypto;
pub mod time;
pub mod validation;

pub use crypto::{certificate_fingerprint, remote_password};
pub use time::{epoch_millis, now_utc};
pub use validation::{
    sanitize_file_name, sanitize_string, validate_choice, validate_hackathon_name,
};
