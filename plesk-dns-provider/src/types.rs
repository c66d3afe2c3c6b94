use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============ DNS Record Types ============

/// A DNS record as seen by the host.
///
/// `id` is empty until the remote store assigns one. Records returned by
/// [`DnsProvider`](crate::DnsProvider) operations always carry the remote ID
/// in its decimal string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Server-assigned identifier (decimal string), or empty.
    #[serde(default)]
    pub id: String,
    /// Record type, e.g. `"A"` or `"TXT"`.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Host label relative to the zone, e.g. `"_acme-challenge"`.
    pub name: String,
    /// Record value.
    pub value: String,
    /// Time to live in seconds.
    pub ttl: u32,
}

impl Record {
    /// Creates a record without an ID.
    pub fn new(
        record_type: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            id: String::new(),
            record_type: record_type.into(),
            name: name.into(),
            value: value.into(),
            ttl,
        }
    }

    /// Returns a copy of this record carrying the given ID.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Whether the record has been assigned an ID by the remote store.
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}

// ============ Provider Metadata Types ============

/// The input type of a configuration field (affects UI rendering).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Plain text input.
    Text,
    /// Masked secret input.
    Password,
}

/// Definition of a single configuration field accepted by a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCredentialField {
    /// Machine-readable key, as used by [`PleskCredentials::from_map`].
    pub key: String,
    /// Human-readable label.
    pub label: String,
    /// Input type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Whether the field must be set.
    pub required: bool,
    /// Optional help text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

/// Static metadata describing a DNS provider.
///
/// Obtain via [`PleskProvider::metadata()`](crate::PleskProvider::metadata).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMetadata {
    /// Provider identifier.
    pub id: String,
    /// Human-readable provider name.
    pub name: String,
    /// Short description of the provider.
    pub description: String,
    /// Configuration fields accepted by this provider.
    pub fields: Vec<ProviderCredentialField>,
}

// ============ Credential Types ============

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://localhost/api/v2";

/// Validation error for provider credentials.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A credential field has an invalid format.
    InvalidFormat {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
        /// Description of what's wrong with the format.
        reason: String,
    },
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat { label, reason, .. } => write!(f, "{label}: {reason}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// Connection settings for a Plesk server.
///
/// All four settings are optional. When both an API key and a username are
/// set, both are sent and the server decides which one wins.
///
/// # Serialization
///
/// ```json
/// { "base_url": "https://plesk.example.com:8443/api/v2", "api_key": "..." }
/// ```
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PleskCredentials {
    /// REST API base URL, e.g. `https://plesk.example.com:8443/api/v2`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Value of the `X-API-Key` header.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_key: String,
    /// HTTP Basic auth user.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub username: String,
    /// HTTP Basic auth password.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,
}

impl std::fmt::Debug for PleskCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::utils::log_sanitizer::mask_secret;

        f.debug_struct("PleskCredentials")
            .field("base_url", &self.base_url)
            .field("api_key", &mask_secret(&self.api_key))
            .field("username", &self.username)
            .field("password", &mask_secret(&self.password))
            .finish()
    }
}

impl PleskCredentials {
    /// Credentials authenticating with an API key.
    pub fn with_api_key(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Credentials authenticating with HTTP Basic auth.
    pub fn with_basic_auth(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: Some(base_url.into()),
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// The configured base URL, falling back to [`DEFAULT_BASE_URL`] when unset or blank.
    pub fn effective_base_url(&self) -> &str {
        match self.base_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url,
            _ => DEFAULT_BASE_URL,
        }
    }

    /// Checks that the effective base URL is an absolute `http`/`https` URL.
    pub fn validate(&self) -> Result<(), CredentialValidationError> {
        let invalid = |reason: String| CredentialValidationError::InvalidFormat {
            field: "baseUrl".to_string(),
            label: "Base URL".to_string(),
            reason,
        };

        let url = reqwest::Url::parse(self.effective_base_url())
            .map_err(|e| invalid(format!("not a valid URL: {e}")))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        }
    }

    /// Construct credentials from a flat key/value map.
    ///
    /// Recognized keys are `baseUrl`, `apiKey`, `username` and `password`;
    /// missing keys leave the setting unset.
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self, CredentialValidationError> {
        let get = |key: &str| map.get(key).map(|v| v.trim().to_string()).unwrap_or_default();

        let base_url = get("baseUrl");
        let credentials = Self {
            base_url: (!base_url.is_empty()).then_some(base_url),
            api_key: get("apiKey"),
            username: get("username"),
            password: map.get("password").cloned().unwrap_or_default(),
        };
        credentials.validate()?;
        Ok(credentials)
    }

    /// Convert credentials to a map for flat key/value storage.
    ///
    /// Unset settings are omitted.
    pub fn to_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        if let Some(base_url) = &self.base_url {
            map.insert("baseUrl".to_string(), base_url.clone());
        }
        for (key, value) in [
            ("apiKey", &self.api_key),
            ("username", &self.username),
            ("password", &self.password),
        ] {
            if !value.is_empty() {
                map.insert(key.to_string(), value.clone());
            }
        }
        map
    }
}
