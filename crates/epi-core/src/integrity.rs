//! Per-file integrity checking.

use sha2::Digest;
use sha2::Sha256;

use crate::Result;
use crate::container::Container;
use crate::error::Mismatch;
use crate::error::MismatchKind;
use crate::error::VerifyError;
use crate::manifest::Manifest;

/// Computes the SHA-256 digest of `data` as lowercase hex.
#[must_use]
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Recomputes and compares content hashes for every `file_manifest` entry.
///
/// All entries are checked and discrepancies aggregated; the pass never
/// aborts on the first mismatch. Comparison is exact string equality on
/// lowercase hex, with no normalization of the manifest's value.
///
/// Returns the number of files whose content was actually hashed (missing
/// entries are recorded but not counted as checked).
///
/// # Errors
///
/// Returns [`VerifyError::IntegrityCheckFailed`] carrying the full mismatch
/// list, in manifest order, if any entry was missing or mismatched.
pub fn check_integrity(container: &mut Container<'_>, manifest: &Manifest) -> Result<usize> {
    let mut mismatches = Vec::new();
    let mut files_checked = 0;

    for (path, expected) in manifest.expected_hashes() {
        if !container.contains(path) {
            mismatches.push(Mismatch {
                path: path.to_string(),
                kind: MismatchKind::Missing,
            });
            continue;
        }

        let content = container.read_bytes(path)?;
        let actual = sha256_hex(&content);
        files_checked += 1;

        if actual != expected {
            mismatches.push(Mismatch {
                path: path.to_string(),
                kind: MismatchKind::HashMismatch {
                    expected: expected.to_string(),
                    actual,
                },
            });
        }
    }

    if mismatches.is_empty() {
        Ok(files_checked)
    } else {
        Err(VerifyError::IntegrityCheckFailed { mismatches })
    }
}
