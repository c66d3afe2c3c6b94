//! Plesk DNS Provider

mod error;
mod http;
mod matching;
mod provider;
/// Plesk REST API request/response types.
pub(crate) mod types;

use std::time::Duration;

use reqwest::Client;

use crate::error::{ProviderError, Result};
use crate::types::PleskCredentials;
use crate::utils::log_sanitizer::mask_secret;

/// Provider identifier used in errors and logs.
pub(crate) const PROVIDER_NAME: &str = "plesk";
/// Header carrying the Plesk API key.
pub(crate) const API_KEY_HEADER: &str = "X-API-Key";
/// DNS records collection path, relative to the base URL.
pub(crate) const RECORDS_PATH: &str = "/dns/records";

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Plesk DNS provider implementation.
///
/// Talks to the Plesk REST API (`/dns/records`), authenticating with an
/// `X-API-Key` header and/or HTTP Basic credentials.
///
/// The handle holds only immutable configuration and a pooled HTTP client, so a
/// single instance can be shared across tasks (e.g. behind an `Arc`).
///
/// # Construction
///
/// ```rust,no_run
/// use plesk_dns_provider::{PleskCredentials, PleskProvider};
///
/// let provider = PleskProvider::new(PleskCredentials::with_api_key(
///     "https://plesk.example.com:8443/api/v2",
///     "your-api-key",
/// ))?;
/// # Ok::<(), plesk_dns_provider::ProviderError>(())
/// ```
pub struct PleskProvider {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) api_key: String,
    pub(crate) username: String,
    pub(crate) password: String,
}

impl std::fmt::Debug for PleskProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PleskProvider")
            .field("base_url", &self.base_url)
            .field("api_key", &mask_secret(&self.api_key))
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Builder for [`PleskProvider`] with configurable timeouts.
pub struct PleskProviderBuilder {
    credentials: PleskCredentials,
    timeout: Duration,
    connect_timeout: Duration,
}

impl PleskProviderBuilder {
    fn new(credentials: PleskCredentials) -> Self {
        Self {
            credentials,
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Deadline for a whole request/response cycle (default: 30s).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Deadline for establishing the connection (default: 10s).
    pub fn connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// Build the [`PleskProvider`] instance.
    ///
    /// Fails with `InvalidParameter` when the base URL is malformed or the HTTP
    /// client cannot be created.
    pub fn build(self) -> Result<PleskProvider> {
        let Self {
            credentials,
            timeout,
            connect_timeout,
        } = self;

        credentials
            .validate()
            .map_err(|e| invalid_config("base_url", e))?;

        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| invalid_config("client", format!("failed to create HTTP client: {e}")))?;

        let provider = PleskProvider {
            client,
            base_url: credentials
                .effective_base_url()
                .trim_end_matches('/')
                .to_string(),
            api_key: credentials.api_key,
            username: credentials.username,
            password: credentials.password,
        };

        log::debug!(
            "[{PROVIDER_NAME}] configured: base_url={}, api_key={}, basic_auth={}",
            provider.base_url,
            mask_secret(&provider.api_key),
            !provider.username.is_empty()
        );

        Ok(provider)
    }
}

fn invalid_config(param: &str, detail: impl ToString) -> ProviderError {
    ProviderError::InvalidParameter {
        provider: PROVIDER_NAME.to_string(),
        param: param.to_string(),
        detail: detail.to_string(),
    }
}

impl PleskProvider {
    /// Creates a new Plesk provider with default timeouts.
    pub fn new(credentials: PleskCredentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(credentials: PleskCredentials) -> PleskProviderBuilder {
        PleskProviderBuilder::new(credentials)
    }
}
