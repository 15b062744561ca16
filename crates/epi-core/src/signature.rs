//! Signature envelope format checking.
//!
//! An envelope is the colon-delimited string `algorithm:key_name:signature`.
//! Only the envelope's *shape* is checked here: the signature bytes are never
//! cryptographically verified, and callers must surface a `SIGNED`
//! classification as "format valid" rather than as proof of authenticity.

use serde::Serialize;

use crate::Result;
use crate::error::SignatureFailure;
use crate::error::VerifyError;

/// The only signature algorithm tag currently recognized.
pub const SUPPORTED_ALGORITHM: &str = "ed25519";

/// Derived trust classification of a container, based on signature format
/// validity only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "level", rename_all = "UPPERCASE")]
pub enum TrustLevel {
    /// No signature envelope present. Structurally valid, lower trust.
    Unsigned,
    /// A syntactically valid envelope of the supported algorithm is present.
    ///
    /// This is a format check only. The signature was not cryptographically
    /// verified.
    Signed {
        /// Algorithm tag from the envelope.
        algorithm: String,
        /// Key name from the envelope.
        key_name: String,
    },
}

impl TrustLevel {
    /// Classifies an optional signature envelope string.
    ///
    /// Absent or empty input classifies as [`TrustLevel::Unsigned`], which is
    /// not a failure. A present envelope must have exactly three
    /// colon-separated fields and name the supported algorithm.
    pub fn classify(signature: Option<&str>) -> Result<Self> {
        let Some(envelope) = signature.filter(|s| !s.is_empty()) else {
            return Ok(Self::Unsigned);
        };

        let parts: Vec<&str> = envelope.split(':').collect();
        if parts.len() != 3 {
            return Err(VerifyError::SignatureInvalid {
                reason: SignatureFailure::InvalidFormat { parts: parts.len() },
            });
        }

        if parts[0] != SUPPORTED_ALGORITHM {
            return Err(VerifyError::SignatureInvalid {
                reason: SignatureFailure::UnsupportedAlgorithm {
                    algorithm: parts[0].to_string(),
                },
            });
        }

        Ok(Self::Signed {
            algorithm: parts[0].to_string(),
            key_name: parts[1].to_string(),
        })
    }

    /// User-facing trust label, `UNSIGNED` or `SIGNED`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unsigned => "UNSIGNED",
            Self::Signed { .. } => "SIGNED",
        }
    }

    /// Returns whether a syntactically valid signature is present.
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        matches!(self, Self::Signed { .. })
    }
}
