//! Error types for container verification.

use serde::Serialize;
use thiserror::Error;

/// Result type alias using `VerifyError`.
pub type Result<T> = std::result::Result<T, VerifyError>;

/// A single integrity discrepancy found during the per-file hash pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Archive-relative path of the affected payload file.
    pub path: String,

    /// What went wrong for this entry.
    #[serde(flatten)]
    pub kind: MismatchKind,
}

/// Kind of integrity discrepancy for a manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum MismatchKind {
    /// Entry listed in the manifest is absent from the archive.
    Missing,
    /// Entry content hashes to a different digest than the manifest claims.
    HashMismatch {
        /// Digest recorded in the manifest.
        expected: String,
        /// Digest recomputed from the archive entry.
        actual: String,
    },
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            MismatchKind::Missing => write!(f, "{}: file missing", self.path),
            MismatchKind::HashMismatch { expected, actual } => {
                write!(
                    f,
                    "{}: hash mismatch (expected {expected}, got {actual})",
                    self.path
                )
            }
        }
    }
}

/// Sub-reason for a rejected signature envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SignatureFailure {
    /// Envelope does not have exactly three colon-separated fields.
    InvalidFormat {
        /// Number of fields actually found.
        parts: usize,
    },
    /// Envelope names an algorithm other than the supported one.
    UnsupportedAlgorithm {
        /// The offending algorithm tag.
        algorithm: String,
    },
}

impl std::fmt::Display for SignatureFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat { parts } => {
                write!(f, "invalid signature format ({parts} fields, expected 3)")
            }
            Self::UnsupportedAlgorithm { algorithm } => {
                write!(f, "unsupported algorithm: {algorithm}")
            }
        }
    }
}

/// Errors that can occur while verifying an EPI container.
///
/// Variants are mutually exclusive and ordered by pipeline stage; the first
/// failing stage wins. Every variant carries enough structured detail for a
/// caller to render a specific message without parsing strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// Input bytes are not a valid zip container.
    #[error("malformed archive: {0}")]
    MalformedArchive(String),

    /// A required container entry is missing.
    #[error("invalid container structure: missing {entry}")]
    InvalidStructure {
        /// Name of the missing required entry.
        entry: String,
    },

    /// The `mimetype` entry does not hold the EPI sentinel value.
    #[error("invalid mimetype: {found}")]
    InvalidMimetype {
        /// The trimmed value actually found.
        found: String,
    },

    /// `manifest.json` is not valid JSON.
    #[error("manifest parse error: {0}")]
    ManifestParse(String),

    /// One or more payload files failed the integrity pass.
    #[error("integrity check failed: {} file(s) did not match", mismatches.len())]
    IntegrityCheckFailed {
        /// Every discrepancy found, in manifest order.
        mismatches: Vec<Mismatch>,
    },

    /// The signature envelope has an invalid shape or algorithm.
    #[error("signature verification failed: {reason}")]
    SignatureInvalid {
        /// The specific sub-reason.
        reason: SignatureFailure,
    },

    /// Any failure not anticipated by the taxonomy above.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl VerifyError {
    /// Returns the machine-stable category code for this error.
    ///
    /// Codes are part of the public contract (JSON output, scripting) and
    /// never change between releases.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::MalformedArchive(_) => "malformed_archive",
            Self::InvalidStructure { .. } => "invalid_structure",
            Self::InvalidMimetype { .. } => "invalid_mimetype",
            Self::ManifestParse(_) => "manifest_parse_error",
            Self::IntegrityCheckFailed { .. } => "integrity_check_failed",
            Self::SignatureInvalid { .. } => "signature_invalid",
            Self::Unexpected(_) => "unexpected_error",
        }
    }

    /// Returns the aggregated mismatch list, if this is an integrity failure.
    ///
    /// `IntegrityCheckFailed` is the only category that reports a batch of
    /// sub-errors rather than a single reason.
    #[must_use]
    pub fn mismatches(&self) -> Option<&[Mismatch]> {
        match self {
            Self::IntegrityCheckFailed { mismatches } => Some(mismatches),
            _ => None,
        }
    }

    /// Returns the signature sub-reason, if this is a signature failure.
    #[must_use]
    pub const fn signature_failure(&self) -> Option<&SignatureFailure> {
        match self {
            Self::SignatureInvalid { reason } => Some(reason),
            _ => None,
        }
    }
}
