//! Plesk REST API type definition

use serde::{Deserialize, Serialize};

use crate::types::Record;

/// DNS record as returned by `GET /dns/records`.
#[derive(Debug, Clone, Deserialize)]
pub struct PleskRecord {
    pub id: u64,
    #[serde(rename = "type")]
    pub record_type: String,
    pub host: String,
    pub value: String,
    /// Plesk's option column (MX priority etc.); not part of [`Record`].
    #[serde(default)]
    #[allow(dead_code)]
    pub opt: Option<String>,
    pub ttl: u32,
}

impl From<PleskRecord> for Record {
    fn from(r: PleskRecord) -> Self {
        Self {
            id: r.id.to_string(),
            record_type: r.record_type,
            name: r.host,
            value: r.value,
            ttl: r.ttl,
        }
    }
}

/// Request body of `POST /dns/records` and `PUT /dns/records/{id}`.
#[derive(Debug, Serialize)]
pub struct RecordBody<'a> {
    #[serde(rename = "type")]
    pub record_type: &'a str,
    pub host: &'a str,
    pub value: &'a str,
    pub ttl: u32,
}

impl<'a> From<&'a Record> for RecordBody<'a> {
    fn from(r: &'a Record) -> Self {
        Self {
            record_type: &r.record_type,
            host: &r.name,
            value: &r.value,
            ttl: r.ttl,
        }
    }
}

/// Response payload of `POST /dns/records`.
#[derive(Debug, Deserialize)]
pub struct CreateRecordResponse {
    pub id: u64,
}
