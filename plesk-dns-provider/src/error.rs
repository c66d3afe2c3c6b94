use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all Plesk DNS operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// # Error Classes
///
/// - Configuration: [`InvalidParameter`](Self::InvalidParameter), raised before any I/O.
/// - Transport: [`NetworkError`](Self::NetworkError), [`Timeout`](Self::Timeout),
///   [`SerializationError`](Self::SerializationError).
/// - Remote (HTTP status >= 400): [`InvalidCredentials`](Self::InvalidCredentials),
///   [`PermissionDenied`](Self::PermissionDenied), [`RecordNotFound`](Self::RecordNotFound),
///   [`DomainNotFound`](Self::DomainNotFound), [`ApiError`](Self::ApiError).
///   These always carry the server's response body verbatim.
/// - Decode: [`ParseError`](Self::ParseError), a success response of unexpected shape.
///
/// Nothing is retried; every error is returned to the caller as-is.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused,
    /// malformed request URL, etc.).
    #[error("[{provider}] Network error: {detail}")]
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("[{provider}] Request timeout: {detail}")]
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The remote API rejected the configured credentials (HTTP 401).
    #[error("[{provider}] Invalid credentials: {raw_message}")]
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Response body returned by the API.
        raw_message: String,
    },

    /// The authenticated user lacks permission for the requested operation (HTTP 403).
    #[error("[{provider}] Permission denied: {raw_message}")]
    PermissionDenied {
        /// Provider that produced the error.
        provider: String,
        /// Response body returned by the API.
        raw_message: String,
    },

    /// The addressed DNS record does not exist (HTTP 404 on an ID-addressed call).
    #[error("[{provider}] Record '{record_id}' not found: {raw_message}")]
    RecordNotFound {
        /// Provider that produced the error.
        provider: String,
        /// ID of the record that was not found.
        record_id: String,
        /// Response body returned by the API.
        raw_message: String,
    },

    /// The zone is unknown to the server (HTTP 404 on a zone-addressed call).
    #[error("[{provider}] Domain '{domain}' not found: {raw_message}")]
    DomainNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Zone name that was not found.
        domain: String,
        /// Response body returned by the API.
        raw_message: String,
    },

    /// Any other HTTP error status returned by the API.
    #[error("[{provider}] HTTP {status}: {raw_message}")]
    ApiError {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code.
        status: u16,
        /// Response body returned by the API.
        raw_message: String,
    },

    /// A caller-supplied value is invalid (empty record ID, malformed base URL, ...).
    #[error("[{provider}] Invalid parameter '{param}': {detail}")]
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Failed to parse a successful API response.
    #[error("[{provider}] Parse error: {detail}")]
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    #[error("[{provider}] Serialization error: {detail}")]
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::RecordNotFound { .. }
                | Self::DomainNotFound { .. }
                | Self::InvalidParameter { .. }
        )
    }

    /// The raw response body, for errors produced by an HTTP error status.
    pub fn raw_message(&self) -> Option<&str> {
        match self {
            Self::InvalidCredentials { raw_message, .. }
            | Self::PermissionDenied { raw_message, .. }
            | Self::RecordNotFound { raw_message, .. }
            | Self::DomainNotFound { raw_message, .. }
            | Self::ApiError { raw_message, .. } => Some(raw_message),
            _ => None,
        }
    }
}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
