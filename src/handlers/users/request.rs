//! User request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_DESCRIPTION_LENGTH;

/// Update profile request
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 64))]
    pub real_name: Option<String>,

    #[validate(length(max = 32))]
    pub phone: Option<String>,

    #[validate(length(max = 256))]
    pub address: Option<String>,

    #[validate(length(max = 64))]
    pub career: Option<String>,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,
}

/// Register for the current hackathon
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
pub struct UserRegistrationRequest {
    #[validate(length(max = 64))]
    pub real_name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 32))]
    pub phone: Option<String>,

    #[validate(length(max = 1024))]
    pub remark: Option<String>,
}

/// Start an experiment from one of the hackathon's templates
#[derive(Debug, Deserialize, Validate)]
pub struct StartExperimentRequest {
    #[validate(length(min = 1))]
    pub template_name: String,
}

/// Keep a running experiment alive
#[derive(Debug, Deserialize)]
pub struct HeartBeatRequest {
    pub id: i64,
}
