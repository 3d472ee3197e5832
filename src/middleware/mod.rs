//! HTTP middleware

pub mod auth;
pub mod guards;
pub mod logging;

pub use auth::{authenticate, AuthenticatedUser};
pub use guards::{
    admin_privilege_required, hackathon_name_required, token_required, CurrentHackathon,
};
pub use logging::logging_middleware;
