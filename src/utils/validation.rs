//! Input validation utilities

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    constants::{MAX_HACKATHON_NAME_LENGTH, MIN_HACKATHON_NAME_LENGTH},
    error::{AppError, AppResult},
};

static HACKATHON_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").expect("valid hackathon name regex"));

/// Validate a hackathon name (it is used in URLs and request headers)
pub fn validate_hackathon_name(name: &str) -> Result<(), &'static str> {
    if (name.len() as u64) < MIN_HACKATHON_NAME_LENGTH {
        return Err("Hackathon name must be at least 2 characters");
    }
    if name.len() as u64 > MAX_HACKATHON_NAME_LENGTH {
        return Err("Hackathon name must be at most 50 characters");
    }
    if !HACKATHON_NAME.is_match(name) {
        return Err(
            "Hackathon name can only contain lowercase letters, numbers, underscores, and hyphens",
        );
    }
    Ok(())
}

/// Validate a storage key handed back by a client
pub fn validate_storage_key(key: &str) -> Result<(), &'static str> {
    if key.is_empty() {
        return Err("File key cannot be empty");
    }
    if key.contains('/') || key.contains('\\') || key.contains("..") {
        return Err("File key must not contain path separators");
    }
    Ok(())
}

/// Check that a numeric code is one of the allowed values
pub fn validate_choice(field: &str, value: i32, allowed: &[i32]) -> AppResult<()> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "{field} must be one of {allowed:?}, got {value}"
        )))
    }
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Reduce a client supplied file name to a safe single path component
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned.to_string()
    }
}
