//! Provider factory functions and metadata.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::PleskProvider;
use crate::traits::DnsProvider;
use crate::types::{PleskCredentials, ProviderMetadata};

/// Creates a [`DnsProvider`] instance from the given credentials.
///
/// The returned provider is wrapped in `Arc<dyn DnsProvider>` so the host can
/// hold one long-lived handle and share it across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use plesk_dns_provider::{create_provider, PleskCredentials};
///
/// let provider = create_provider(PleskCredentials::with_api_key(
///     "https://plesk.example.com:8443/api/v2",
///     "your-api-key",
/// ))
/// .unwrap();
/// ```
pub fn create_provider(credentials: PleskCredentials) -> Result<Arc<dyn DnsProvider>> {
    Ok(Arc::new(PleskProvider::new(credentials)?))
}

/// Returns metadata for all available providers.
pub fn get_all_provider_metadata() -> Vec<ProviderMetadata> {
    vec![PleskProvider::metadata()]
}
