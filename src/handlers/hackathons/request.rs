//! Hackathon request DTOs

use serde::Deserialize;

/// List hackathons query parameters
#[derive(Debug, Deserialize)]
pub struct ListHackathonsQuery {
    /// Substring of the name or display name
    pub name: Option<String>,
    pub status: Option<i32>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Hackathon team list query parameters
#[derive(Debug, Deserialize)]
pub struct TeamNameQuery {
    pub name: Option<String>,
}
