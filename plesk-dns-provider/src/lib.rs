//! # plesk-dns-provider
//!
//! DNS record management for zones hosted on a [Plesk](https://www.plesk.com/)
//! server, through its REST API. Built for certificate automation (ACME DNS-01
//! challenge TXT records) and general record CRUD.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation and static builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use plesk_dns_provider::{create_provider, DnsProvider, PleskCredentials, Record};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. One long-lived provider handle, configured once
//!     let provider = create_provider(PleskCredentials::with_api_key(
//!         "https://plesk.example.com:8443/api/v2",
//!         "your-api-key",
//!     ))?;
//!
//!     // 2. Publish a DNS-01 challenge record
//!     let challenge = Record::new("TXT", "_acme-challenge", "token-digest", 120);
//!     let created = provider
//!         .append_records("example.com", std::slice::from_ref(&challenge))
//!         .await?;
//!     println!("created record {}", created[0].id);
//!
//!     // 3. Remove it again by content, without knowing the ID
//!     let deleted = provider.delete_records("example.com", &[challenge]).await?;
//!     println!("deleted {} record(s)", deleted.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Deleting Records
//!
//! [`DnsProvider::delete_records`] accepts records with or without an ID. Records
//! with an ID are deleted directly. Records without one are matched against the
//! zone by their exact `(type, name, value, ttl)`; the first match in listing
//! order is deleted, a missing match is silently skipped, and no remote record
//! is deleted twice within one call.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::InvalidParameter`] — caller error, detected before any request
//! - [`ProviderError::NetworkError`] / [`ProviderError::Timeout`] — transport failure
//! - [`ProviderError::ApiError`] and friends — HTTP status >= 400, with the
//!   server's response body verbatim
//! - [`ProviderError::ParseError`] — a successful response had an unexpected shape
//!
//! Nothing is retried. Batch operations stop at the first error and keep the
//! work already done; re-list the zone to see what went through.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::{create_provider, get_all_provider_metadata};

// Re-export core trait only (internal traits are not exported)
pub use traits::DnsProvider;

// Re-export types
pub use types::{
    CredentialValidationError, DEFAULT_BASE_URL, FieldType, PleskCredentials,
    ProviderCredentialField, ProviderMetadata, Record,
};

// Re-export concrete providers
pub use providers::{PleskProvider, PleskProviderBuilder};
