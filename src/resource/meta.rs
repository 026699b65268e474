//! Structured resource metadata.
//!
//! Metadata is kept as typed values from the moment a record is created and
//! is never re-derived from text. The version tag is deterministic: a record
//! starts at `v<id>` and every mutation appends a suffix naming it, so the
//! tag encodes the record's mutation lineage.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Suffix appended to the version tag by each PATCH.
pub const PATCH_VERSION_SUFFIX: &str = ".patch";

/// Suffix appended to the version tag by each refreshing Replace.
pub const REPLACE_VERSION_SUFFIX: &str = ".replace";

/// Creation time, last modification time and version tag of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub created: DateTime<Utc>,
    #[serde(rename = "lastModified")]
    pub last_modified: DateTime<Utc>,
    pub version: String,
}

impl Meta {
    /// Metadata of a freshly created record.
    pub fn for_new_record(id: &str, now: DateTime<Utc>) -> Self {
        Self {
            created: now,
            last_modified: now,
            version: initial_version(id),
        }
    }

    /// Metadata after a PATCH has been applied.
    pub fn patched(&self, now: DateTime<Utc>) -> Self {
        self.advanced(now, PATCH_VERSION_SUFFIX)
    }

    /// Metadata after a Replace under the refresh policy.
    pub fn replaced(&self, now: DateTime<Utc>) -> Self {
        self.advanced(now, REPLACE_VERSION_SUFFIX)
    }

    // lastModified never moves backwards, even if the wall clock does.
    fn advanced(&self, now: DateTime<Utc>, suffix: &str) -> Self {
        Self {
            created: self.created,
            last_modified: now.max(self.last_modified),
            version: format!("{}{}", self.version, suffix),
        }
    }

    /// Weak ETag form of the version, e.g. `W/"v0042.patch"`.
    pub fn etag(&self) -> String {
        format!("W/\"{}\"", self.version)
    }

    /// SCIM wire representation of the `meta` attribute.
    pub fn to_json(&self, location: Option<&str>) -> Value {
        let mut meta = json!({
            "resourceType": "User",
            "created": self.created.to_rfc3339_opts(SecondsFormat::Millis, true),
            "lastModified": self.last_modified.to_rfc3339_opts(SecondsFormat::Millis, true),
            "version": self.etag(),
        });
        if let (Some(location), Some(obj)) = (location, meta.as_object_mut()) {
            obj.insert("location".to_string(), json!(location));
        }
        meta
    }
}

/// Base version tag of a record.
pub fn initial_version(id: &str) -> String {
    format!("v{}", id)
}
