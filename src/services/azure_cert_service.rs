//! Azure management certificate manager
//!
//! Certificates are keyed by hackathon name and subscription. Generation is
//! simulated: the published URL and fingerprint are derived from the
//! subscription and management host.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    config::AzureConfig,
    db::Store,
    error::{AppError, AppResult},
    models::Certificate,
    utils::{certificate_fingerprint, now_utc},
};

/// Azure management certificates per hackathon
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AzureCertManager: Send + Sync {
    /// Certificates of a hackathon, or `None` if it has none
    async fn get_certificates(&self, hackathon_name: &str) -> AppResult<Option<Vec<Certificate>>>;

    /// Create (or reuse) the certificate of a subscription; returns its URL
    async fn create_certificate(
        &self,
        subscription_id: &str,
        management_host: &str,
        hackathon_name: &str,
    ) -> AppResult<String>;

    async fn update_certificate(
        &self,
        hackathon_name: &str,
        certificate_id: i64,
        management_host: &str,
    ) -> AppResult<Certificate>;

    /// Returns false if the hackathon has no such certificate
    async fn delete_certificate(&self, hackathon_name: &str, certificate_id: i64)
    -> AppResult<bool>;
}

/// In-memory certificate manager
pub struct AzureCertService {
    store: Store,
    base_url: String,
}

impl AzureCertService {
    pub fn new(store: Store, config: &AzureConfig) -> Self {
        Self {
            store,
            base_url: config.cert_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn cert_url(&self, hackathon_name: &str, subscription_id: &str) -> String {
        format!("{}/{hackathon_name}/{subscription_id}.cer", self.base_url)
    }
}

#[async_trait]
impl AzureCertManager for AzureCertService {
    async fn get_certificates(&self, hackathon_name: &str) -> AppResult<Option<Vec<Certificate>>> {
        let certificates: Vec<Certificate> = self
            .store
            .read()
            .await
            .certificates
            .values()
            .filter(|c| c.hackathon_name == hackathon_name)
            .cloned()
            .collect();

        Ok((!certificates.is_empty()).then_some(certificates))
    }

    async fn create_certificate(
        &self,
        subscription_id: &str,
        management_host: &str,
        hackathon_name: &str,
    ) -> AppResult<String> {
        let subscription = Uuid::parse_str(subscription_id).map_err(|_| {
            AppError::InvalidInput(format!("subscription {subscription_id} is not a valid id"))
        })?;
        if management_host.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "management host cannot be empty".to_string(),
            ));
        }
        let subscription_id = subscription.hyphenated().to_string();

        let mut tables = self.store.write().await;
        if let Some(existing) = tables
            .certificates
            .values()
            .find(|c| c.hackathon_name == hackathon_name && c.subscription_id == subscription_id)
        {
            return Ok(existing.cert_url.clone());
        }

        let certificate = Certificate {
            id: tables.next_id(),
            hackathon_name: hackathon_name.to_string(),
            cert_url: self.cert_url(hackathon_name, &subscription_id),
            fingerprint: certificate_fingerprint(&subscription_id, management_host),
            subscription_id,
            management_host: management_host.to_string(),
            create_time: now_utc(),
        };
        let url = certificate.cert_url.clone();
        tables.certificates.insert(certificate.id, certificate);

        tracing::info!(hackathon = %hackathon_name, url = %url, "Certificate created");
        Ok(url)
    }

    async fn update_certificate(
        &self,
        hackathon_name: &str,
        certificate_id: i64,
        management_host: &str,
    ) -> AppResult<Certificate> {
        let mut tables = self.store.write().await;
        let certificate = tables
            .certificates
            .get_mut(&certificate_id)
            .filter(|c| c.hackathon_name == hackathon_name)
            .ok_or_else(|| AppError::NotFound(format!("Certificate {certificate_id}")))?;

        certificate.management_host = management_host.to_string();
        certificate.fingerprint =
            certificate_fingerprint(&certificate.subscription_id, management_host);

        Ok(certificate.clone())
    }

    async fn delete_certificate(
        &self,
        hackathon_name: &str,
        certificate_id: i64,
    ) -> AppResult<bool> {
        let mut tables = self.store.write().await;
        let owned = tables
            .certificates
            .get(&certificate_id)
            .is_some_and(|c| c.hackathon_name == hackathon_name);

        if owned {
            tables.certificates.remove(&certificate_id);
            tracing::info!(hackathon = %hackathon_name, certificate_id, "Certificate deleted");
        }
        Ok(owned)
    }
}
