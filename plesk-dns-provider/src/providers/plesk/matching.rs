//! Resolution of delete requests to remote record IDs.
//!
//! A record without an ID is matched by its content key `(type, host, value, ttl)`
//! against a snapshot of the zone. The first record in listing order wins. Each
//! remote ID is deleted at most once per batch, so a content key requested twice
//! still removes a single remote record.

use std::collections::HashSet;

use crate::types::Record;

use super::types::PleskRecord;

/// The fields that identify a record when no ID is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ContentKey<'a> {
    record_type: &'a str,
    host: &'a str,
    value: &'a str,
    ttl: u32,
}

impl<'a> From<&'a Record> for ContentKey<'a> {
    fn from(r: &'a Record) -> Self {
        Self {
            record_type: &r.record_type,
            host: &r.name,
            value: &r.value,
            ttl: r.ttl,
        }
    }
}

impl<'a> From<&'a PleskRecord> for ContentKey<'a> {
    fn from(r: &'a PleskRecord) -> Self {
        Self {
            record_type: &r.record_type,
            host: &r.host,
            value: &r.value,
            ttl: r.ttl,
        }
    }
}

/// How a single delete request resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resolution {
    /// Delete this remote ID.
    Delete(u64),
    /// No remote record has this content; treat as already absent.
    NoMatch,
    /// The target ID was already deleted earlier in this batch.
    AlreadyClaimed(u64),
}

/// Per-batch matching state: the zone snapshot (fetched only when a
/// content-addressed request shows up) and the IDs already claimed.
#[derive(Debug, Default)]
pub(crate) struct DeleteMatcher {
    snapshot: Option<Vec<PleskRecord>>,
    claimed: HashSet<u64>,
}

impl DeleteMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn set_snapshot(&mut self, snapshot: Vec<PleskRecord>) {
        self.snapshot = Some(snapshot);
    }

    /// Claim an explicitly addressed ID.
    pub fn claim_id(&mut self, id: u64) -> Resolution {
        if self.claimed.insert(id) {
            Resolution::Delete(id)
        } else {
            Resolution::AlreadyClaimed(id)
        }
    }

    /// Claim the first snapshot record whose content key equals `record`'s.
    ///
    /// Without a snapshot nothing matches.
    pub fn claim_content(&mut self, record: &Record) -> Resolution {
        let wanted = ContentKey::from(record);
        let found = self
            .snapshot
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|remote| ContentKey::from(*remote) == wanted)
            .map(|remote| remote.id);

        match found {
            Some(id) => self.claim_id(id),
            None => Resolution::NoMatch,
        }
    }
}
