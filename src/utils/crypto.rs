//! Secrets and fingerprints handed out with experiments and certificates

use rand::{distr::Alphanumeric, Rng};
use sha2::{Digest, Sha256};

use crate::constants::REMOTE_PASSWORD_LENGTH;

/// Random alphanumeric password for a remote desktop connection
pub fn remote_password() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(REMOTE_PASSWORD_LENGTH)
        .map(char::from)
        .collect()
}

/// Hex SHA-256 fingerprint of a management certificate.
///
/// A certificate is identified by the subscription it belongs to and the
/// management host it was issued for.
pub fn certificate_fingerprint(subscription_id: &str, management_host: &str) -> String {
    let digest = Sha256::new()
        .chain_update(subscription_id.as_bytes())
        .chain_update(b"@")
        .chain_update(management_host.as_bytes())
        .finalize();
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_password() {
        let a = remote_password();
        let b = remote_password();

        assert_eq!(a.len(), REMOTE_PASSWORD_LENGTH);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_certificate_fingerprint() {
        let fp = certificate_fingerprint("sub", "mgmt.example.com");

        assert_eq!(fp.len(), 64);
        assert_eq!(fp, certificate_fingerprint("sub", "mgmt.example.com"));
        assert_ne!(fp, certificate_fingerprint("sub", "other.example.com"));
    }
}
