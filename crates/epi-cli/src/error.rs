//! Error conversion utilities for CLI.
//!
//! Converts epi-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use epi_core::VerifyError;
use std::path::Path;

/// Converts `VerifyError` to a user-friendly anyhow error with context
pub fn convert_verify_error(err: &VerifyError, file: &Path) -> anyhow::Error {
    match err {
        VerifyError::MalformedArchive(reason) => {
            anyhow!(
                "'{}' is not a valid EPI container: {reason}\n\
                 HINT: A .epi file is a zip archive. The file may be truncated or renamed.",
                file.display()
            )
        }
        VerifyError::InvalidStructure { entry } => {
            anyhow!(
                "'{}' is missing the required entry '{entry}'\n\
                 HINT: Every container must carry both 'mimetype' and 'manifest.json'.",
                file.display()
            )
        }
        VerifyError::InvalidMimetype { found } => {
            anyhow!(
                "'{}' has the wrong mimetype: '{found}'\n\
                 HINT: Expected '{}'. The file is a zip archive but not an EPI container.",
                file.display(),
                epi_core::EPI_MIMETYPE
            )
        }
        VerifyError::ManifestParse(reason) => {
            anyhow!(
                "manifest.json in '{}' is not valid JSON: {reason}",
                file.display()
            )
        }
        VerifyError::IntegrityCheckFailed { mismatches } => {
            let detail: Vec<String> = mismatches.iter().map(|m| format!("  - {m}")).collect();
            anyhow!(
                "integrity check failed for '{}':\n{}\n\
                 HINT: The container's contents were altered after it was produced.",
                file.display(),
                detail.join("\n")
            )
        }
        VerifyError::SignatureInvalid { reason } => {
            anyhow!(
                "signature envelope in '{}' was rejected: {reason}\n\
                 HINT: Expected the form 'ed25519:<key-name>:<signature>'.",
                file.display()
            )
        }
        VerifyError::Unexpected(reason) => {
            anyhow!("unexpected error while verifying '{}': {reason}", file.display())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use epi_core::Mismatch;
    use epi_core::MismatchKind;

    #[test]
    fn test_convert_malformed_archive() {
        let err = VerifyError::MalformedArchive("bad central directory".to_string());
        let converted = convert_verify_error(&err, Path::new("broken.epi"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("broken.epi"));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_integrity_failure_lists_files() {
        let err = VerifyError::IntegrityCheckFailed {
            mismatches: vec![
                Mismatch {
                    path: "a.txt".to_string(),
                    kind: MismatchKind::Missing,
                },
                Mismatch {
                    path: "b.txt".to_string(),
                    kind: MismatchKind::HashMismatch {
                        expected: "aa".to_string(),
                        actual: "bb".to_string(),
                    },
                },
            ],
        };
        let converted = convert_verify_error(&err, Path::new("evidence.epi"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("a.txt: file missing"));
        assert!(msg.contains("b.txt: hash mismatch"));
    }

    #[test]
    fn test_convert_mimetype_names_expected_value() {
        let err = VerifyError::InvalidMimetype {
            found: "application/zip".to_string(),
        };
        let converted = convert_verify_error(&err, Path::new("f.epi"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("application/vnd.epi+zip"));
    }
}
