//! Archive entry value object.
//!
//! # Responsibility
//! - Capture one encoded message for the external archive collaborator.
//!
//! # Invariants
//! - Entries are immutable once built; fields are read through accessors.
//! - `id` is stable for the lifetime of the entry.
//! - `date` is UTC and serializes as RFC 3339 / ISO-8601.

use crate::model::method::CipherMethod;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for archived entries.
pub type ArchiveEntryId = Uuid;

/// One archived encode result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveEntry {
    id: ArchiveEntryId,
    original: String,
    encoded: String,
    method: CipherMethod,
    date: DateTime<Utc>,
}

impl ArchiveEntry {
    /// Creates an entry stamped with a fresh ID and the current time.
    pub fn new(
        original: impl Into<String>,
        encoded: impl Into<String>,
        method: CipherMethod,
    ) -> Self {
        Self::with_parts(Uuid::new_v4(), original, encoded, method, Utc::now())
    }

    /// Creates an entry from caller-supplied identity and timestamp.
    ///
    /// Keeps the wire shape deterministic, e.g. for serialization tests.
    pub fn with_parts(
        id: ArchiveEntryId,
        original: impl Into<String>,
        encoded: impl Into<String>,
        method: CipherMethod,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original: original.into(),
            encoded: encoded.into(),
            method,
            date,
        }
    }

    pub fn id(&self) -> ArchiveEntryId {
        self.id
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    pub fn method(&self) -> CipherMethod {
        self.method
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }
}
