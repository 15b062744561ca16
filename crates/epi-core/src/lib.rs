//! Verification library for EPI evidence containers.
//!
//! `epi-core` opens a `.epi` container (a zip archive with a fixed layout),
//! validates its structure and mimetype sentinel, recomputes SHA-256 content
//! hashes against the manifest, checks the signature envelope's format, and
//! extracts the optional embedded viewer document.
//!
//! Signature checking is format-only: a `SIGNED` classification means the
//! envelope is well-formed, not that the signature was cryptographically
//! verified.
//!
//! # Examples
//!
//! ```no_run
//! use epi_core::verify_container;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = std::fs::read("evidence.epi")?;
//! let verified = verify_container(&bytes)?;
//! println!(
//!     "{} file(s) checked, trust level {}",
//!     verified.evidence.files_checked,
//!     verified.evidence.signature.label()
//! );
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod container;
pub mod error;
pub mod integrity;
pub mod manifest;
pub mod report;
pub mod signature;
pub mod test_utils;
pub mod verify;

// Re-export main API types
pub use container::Container;
pub use container::EPI_MIMETYPE;
pub use error::Mismatch;
pub use error::MismatchKind;
pub use error::Result;
pub use error::SignatureFailure;
pub use error::VerifyError;
pub use manifest::Environment;
pub use manifest::Manifest;
pub use report::CheckStatus;
pub use report::Evidence;
pub use report::Verified;
pub use signature::SUPPORTED_ALGORITHM;
pub use signature::TrustLevel;
pub use verify::verify_container;
