//! Plesk `DnsProvider` trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{FieldType, ProviderCredentialField, ProviderMetadata, Record};

use super::matching::{DeleteMatcher, Resolution};
use super::types::{CreateRecordResponse, PleskRecord, RecordBody};
use super::{PROVIDER_NAME, PleskProvider, RECORDS_PATH};

impl PleskProvider {
    /// Parse a host-facing record ID into the remote integer ID.
    ///
    /// Runs before any request is sent.
    fn parse_record_id(&self, param: &str, id: &str) -> Result<u64> {
        if id.is_empty() {
            return Err(self.invalid_parameter(param, "record ID must not be empty"));
        }
        id.parse::<u64>().map_err(|_| {
            self.invalid_parameter(param, format!("record ID '{id}' is not an unsigned integer"))
        })
    }

    /// `GET /dns/records?domain=<zone>`
    async fn fetch_zone(&self, zone: &str) -> Result<Vec<PleskRecord>> {
        self.get(RECORDS_PATH, &[("domain", zone)], ErrorContext::domain(zone))
            .await
    }

    /// `DELETE /dns/records/<id>`
    async fn delete_by_id(&self, id: u64) -> Result<()> {
        let id = id.to_string();
        self.delete(&format!("{RECORDS_PATH}/{id}"), ErrorContext::record(id))
            .await
    }
}

#[async_trait]
impl DnsProvider for PleskProvider {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn metadata() -> ProviderMetadata {
        ProviderMetadata {
            id: PROVIDER_NAME.to_string(),
            name: "Plesk".to_string(),
            description: "DNS zones hosted on a Plesk server, via its REST API".to_string(),
            fields: vec![
                ProviderCredentialField {
                    key: "baseUrl".to_string(),
                    label: "Base URL".to_string(),
                    field_type: FieldType::Text,
                    required: false,
                    help_text: Some(format!(
                        "REST API root, defaults to {}",
                        crate::types::DEFAULT_BASE_URL
                    )),
                },
                ProviderCredentialField {
                    key: "apiKey".to_string(),
                    label: "API Key".to_string(),
                    field_type: FieldType::Password,
                    required: false,
                    help_text: Some("Sent as the X-API-Key header".to_string()),
                },
                ProviderCredentialField {
                    key: "username".to_string(),
                    label: "Username".to_string(),
                    field_type: FieldType::Text,
                    required: false,
                    help_text: Some("HTTP Basic auth user".to_string()),
                },
                ProviderCredentialField {
                    key: "password".to_string(),
                    label: "Password".to_string(),
                    field_type: FieldType::Password,
                    required: false,
                    help_text: None,
                },
            ],
        }
    }

    async fn list_records(&self, zone: &str) -> Result<Vec<Record>> {
        let records = self.fetch_zone(zone).await?;
        log::debug!("[{PROVIDER_NAME}] {zone}: {} records", records.len());
        Ok(records.into_iter().map(Record::from).collect())
    }

    async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        let mut created = Vec::with_capacity(records.len());

        for record in records {
            let response: CreateRecordResponse = self
                .post(
                    RECORDS_PATH,
                    &[("domain", zone)],
                    &RecordBody::from(record),
                    ErrorContext::domain(zone),
                )
                .await?;

            log::info!(
                "[{PROVIDER_NAME}] created {} record '{}' in {zone} (id {})",
                record.record_type,
                record.name,
                response.id
            );
            created.push(record.clone().with_id(response.id.to_string()));
        }

        Ok(created)
    }

    async fn update_record(
        &self,
        zone: &str,
        existing_id: &str,
        record: &Record,
    ) -> Result<Record> {
        let id = self.parse_record_id("existing_id", existing_id)?;

        self.put(
            &format!("{RECORDS_PATH}/{id}"),
            &RecordBody::from(record),
            ErrorContext::record(existing_id),
        )
        .await?;

        log::info!(
            "[{PROVIDER_NAME}] updated {} record '{}' in {zone} (id {id})",
            record.record_type,
            record.name
        );
        Ok(record.clone().with_id(existing_id))
    }

    async fn delete_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        // Reject malformed IDs before touching the server.
        let ids = records
            .iter()
            .map(|r| {
                r.has_id()
                    .then(|| self.parse_record_id("id", &r.id))
                    .transpose()
            })
            .collect::<Result<Vec<Option<u64>>>>()?;

        let mut matcher = DeleteMatcher::new();
        let mut deleted = Vec::new();

        for (record, id) in records.iter().zip(ids) {
            let resolution = match id {
                Some(id) => matcher.claim_id(id),
                None => {
                    if !matcher.has_snapshot() {
                        matcher.set_snapshot(self.fetch_zone(zone).await?);
                    }
                    matcher.claim_content(record)
                }
            };

            let id = match resolution {
                Resolution::Delete(id) => id,
                Resolution::NoMatch => {
                    log::debug!(
                        "[{PROVIDER_NAME}] no {} record '{}' = '{}' (ttl {}) in {zone}, skipping",
                        record.record_type,
                        record.name,
                        record.value,
                        record.ttl
                    );
                    continue;
                }
                Resolution::AlreadyClaimed(id) => {
                    log::debug!("[{PROVIDER_NAME}] record {id} already deleted in this batch");
                    continue;
                }
            };

            self.delete_by_id(id).await?;
            log::info!(
                "[{PROVIDER_NAME}] deleted {} record '{}' from {zone} (id {id})",
                record.record_type,
                record.name
            );
            deleted.push(record.clone().with_id(id.to_string()));
        }

        Ok(deleted)
    }
}
