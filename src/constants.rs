//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 15000;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

// =============================================================================
// STORAGE DEFAULTS
// =============================================================================

/// Default local directory for uploaded files
pub const DEFAULT_STORAGE_PATH: &str = "./storage";

/// Default public URL prefix for uploaded files
pub const DEFAULT_STORAGE_PUBLIC_URL: &str = "http://localhost:15000/static";

/// Default maximum upload size in megabytes
pub const DEFAULT_MAX_UPLOAD_MB: usize = 10;

/// Default URL prefix under which generated certificates are published
pub const DEFAULT_AZURE_CERT_BASE_URL: &str = "https://localhost/certificates";

/// Default guacamole gateway URL
pub const DEFAULT_GUACAMOLE_URL: &str = "http://localhost:8080/guacamole";

// =============================================================================
// REQUEST HEADERS
// =============================================================================

/// Header carrying the name of the hackathon a request is scoped to
pub const HACKATHON_NAME_HEADER: &str = "hackathon_name";

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for list endpoints
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for list endpoints
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// FIELD LIMITS
// =============================================================================

/// Hackathon name length limits (the name is used in URLs)
pub const MIN_HACKATHON_NAME_LENGTH: u64 = 2;
pub const MAX_HACKATHON_NAME_LENGTH: u64 = 50;

/// Display name maximum length
pub const MAX_DISPLAY_NAME_LENGTH: u64 = 128;

/// Free text description maximum length
pub const MAX_DESCRIPTION_LENGTH: u64 = 10000;

/// Template name maximum length
pub const MAX_TEMPLATE_NAME_LENGTH: u64 = 64;

/// Team name maximum length
pub const MAX_TEAM_NAME_LENGTH: u64 = 64;

// =============================================================================
// HACKATHON STATUS
// =============================================================================

pub mod hackathon_status {
    pub const DRAFT: i32 = 0;
    pub const ONLINE: i32 = 1;
    pub const OFFLINE: i32 = 2;

    pub const ALL: &[i32] = &[DRAFT, ONLINE, OFFLINE];
}

// =============================================================================
// REGISTRATION STATUS
// =============================================================================

pub mod registration_status {
    pub const UNAUDITED: i32 = 0;
    pub const AUDIT_PASSED: i32 = 1;
    pub const AUDIT_REFUSED: i32 = 2;
    pub const AUTO_PASSED: i32 = 3;

    pub const ALL: &[i32] = &[UNAUDITED, AUDIT_PASSED, AUDIT_REFUSED, AUTO_PASSED];
}

// =============================================================================
// ADMINISTRATOR ROLES
// =============================================================================

pub mod admin_role {
    pub const ADMIN: i32 = 1;
    pub const JUDGE: i32 = 2;

    pub const ALL: &[i32] = &[ADMIN, JUDGE];
}

// =============================================================================
// TEMPLATE PROVIDERS
// =============================================================================

pub mod template_provider {
    pub const AZURE: i32 = 0;
    pub const DOCKER: i32 = 1;

    pub const ALL: &[i32] = &[AZURE, DOCKER];
}

// =============================================================================
// TEAM MEMBER STATUS
// =============================================================================

pub mod team_member_status {
    pub const PENDING: i32 = 0;
    pub const APPROVED: i32 = 1;

    pub const ALL: &[i32] = &[PENDING, APPROVED];
}

// =============================================================================
// EXPERIMENT STATUS
// =============================================================================

pub mod experiment_status {
    pub const STARTING: i32 = 1;
    pub const RUNNING: i32 = 2;
    pub const STOPPED: i32 = 3;
    pub const FAILED: i32 = 4;

    pub const ALL: &[i32] = &[STARTING, RUNNING, STOPPED, FAILED];
}

/// Default VNC port exposed by experiment environments
pub const GUACAMOLE_VNC_PORT: u16 = 5901;

/// Length of generated remote desktop passwords
pub const REMOTE_PASSWORD_LENGTH: usize = 12;
