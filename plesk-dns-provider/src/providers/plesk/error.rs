//! Plesk error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{PROVIDER_NAME, PleskProvider};

/// Plesk reports failures through the HTTP status; the body format differs
/// between Plesk versions and extensions, so it is passed through untouched.
impl ProviderErrorMapper for PleskProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.status {
            401 => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: raw.message,
            },
            403 => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: raw.message,
            },
            404 => match context {
                ErrorContext {
                    record_id: Some(record_id),
                    ..
                } => ProviderError::RecordNotFound {
                    provider: self.provider_name().to_string(),
                    record_id,
                    raw_message: raw.message,
                },
                ErrorContext {
                    domain: Some(domain),
                    ..
                } => ProviderError::DomainNotFound {
                    provider: self.provider_name().to_string(),
                    domain,
                    raw_message: raw.message,
                },
                _ => self.api_error(raw),
            },
            _ => self.api_error(raw),
        }
    }
}
