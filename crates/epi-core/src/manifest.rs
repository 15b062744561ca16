//! The EPI container manifest (`manifest.json`).
//!
//! Parsing is deliberately lenient: absent fields default to empty values and
//! unknown fields are ignored, so that older viewers keep working when the
//! format grows new fields. The intent is evidence display, not strict schema
//! enforcement.

use chrono::DateTime;
use chrono::FixedOffset;
use serde::Deserialize;
use serde::Serialize;

use crate::Result;
use crate::error::VerifyError;

/// Metadata document describing a container's contents and signature.
///
/// Deserialized from `manifest.json`. Every field is optional on the wire;
/// missing fields default rather than fail.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Manifest {
    /// Opaque identifier of the workflow that produced the container.
    pub workflow_id: String,

    /// Format version tag.
    pub spec_version: String,

    /// Creation timestamp as written by the producer (ISO-8601).
    pub created_at: String,

    /// Mapping from archive-relative payload path to its expected SHA-256
    /// digest (lowercase hex, 64 characters). Key order is the manifest's
    /// own order and is preserved for reporting.
    pub file_manifest: serde_json::Map<String, serde_json::Value>,

    /// Signature envelope string, `algorithm:key_name:signature_data`.
    /// Absent or empty means the container is unsigned.
    pub signature: Option<String>,

    /// Descriptive producer environment, for display only.
    pub environment: Option<Environment>,
}

/// Producer environment details. Display only, never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Environment {
    /// Operating system name.
    pub os_name: Option<String>,

    /// Platform triple or description.
    pub platform: Option<String>,

    /// Python version of the producing tool.
    pub python_version: Option<String>,
}

impl Manifest {
    /// Parses a manifest from its JSON text.
    ///
    /// Fails only on invalid JSON; absent fields default per the lenient
    /// policy.
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| VerifyError::ManifestParse(e.to_string()))
    }

    /// Iterates `file_manifest` entries as `(path, expected_hash)` pairs in
    /// manifest key order.
    ///
    /// A non-string hash value yields an empty string, which can never equal
    /// a recomputed digest and therefore surfaces as a hash mismatch rather
    /// than a parse failure.
    pub fn expected_hashes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.file_manifest
            .iter()
            .map(|(path, value)| (path.as_str(), value.as_str().unwrap_or_default()))
    }

    /// Number of payload files listed in the manifest.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.file_manifest.len()
    }

    /// Parses `created_at` as an ISO-8601 timestamp, if possible.
    ///
    /// Used for display formatting only; an unparseable value is not a
    /// verification failure.
    #[must_use]
    pub fn created_at_parsed(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.created_at).ok()
    }

    /// Returns whether a non-empty signature envelope is present.
    #[must_use]
    pub fn has_signature(&self) -> bool {
        self.signature.as_deref().is_some_and(|s| !s.is_empty())
    }
}
