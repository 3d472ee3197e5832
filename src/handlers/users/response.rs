//! User response DTOs

use serde::Serialize;

use crate::models::{Hackathon, Registration};

/// A hackathon the user registered for, with the registration itself
#[derive(Debug, Serialize)]
pub struct UserHackathonResponse {
    pub hackathon: Hackathon,
    pub registration: Registration,
}
