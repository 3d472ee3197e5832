//! Admin response DTOs

use serde::Serialize;

/// Created certificate response
#[derive(Debug, Serialize)]
pub struct CertificateUrlResponse {
    pub azure_cert_url: String,
}
