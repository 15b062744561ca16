//! The container verification pipeline.

use crate::Result;
use crate::container::Container;
use crate::container::EPI_MIMETYPE;
use crate::container::MANIFEST_ENTRY;
use crate::container::MIMETYPE_ENTRY;
use crate::container::VIEWER_ENTRY;
use crate::error::VerifyError;
use crate::integrity::check_integrity;
use crate::manifest::Manifest;
use crate::report::CheckStatus;
use crate::report::Evidence;
use crate::report::Verified;
use crate::signature::TrustLevel;

/// Verifies the raw bytes of an `.epi` container.
///
/// Runs the validation pipeline in strict order, short-circuiting on the
/// first failing stage:
///
/// 1. open the zip container
/// 2. require the `mimetype` and `manifest.json` entries
/// 3. check the mimetype sentinel
/// 4. parse the manifest (leniently)
/// 5. recompute and compare every payload hash, aggregating mismatches
/// 6. check the signature envelope's format
/// 7. extract the embedded viewer, if any
///
/// The function is a pure function of its input: stateless, deterministic,
/// and free of side effects beyond allocation. Calling it twice on identical
/// bytes yields identical results.
///
/// Signature checking is format-only; a [`TrustLevel::Signed`] result means
/// the envelope is well-formed, not that the signature was cryptographically
/// verified.
///
/// # Errors
///
/// Returns one [`VerifyError`] category per the taxonomy in
/// [`crate::error`]; integrity failure is the only category carrying a batch
/// of per-file sub-errors, and it is reported before the signature is ever
/// inspected.
pub fn verify_container(bytes: &[u8]) -> Result<Verified> {
    // 1. Open.
    let mut container = Container::open(bytes)?;

    // 2. Structural check: both required entries must exist.
    for required in [MIMETYPE_ENTRY, MANIFEST_ENTRY] {
        if !container.contains(required) {
            return Err(VerifyError::InvalidStructure {
                entry: required.to_string(),
            });
        }
    }

    // 3. Mimetype gate: exact sentinel after trimming.
    let mimetype = container.read_text_lossy(MIMETYPE_ENTRY)?;
    if mimetype.trim() != EPI_MIMETYPE {
        return Err(VerifyError::InvalidMimetype {
            found: mimetype.trim().to_string(),
        });
    }

    // 4. Manifest parse.
    let manifest_bytes = container.read_bytes(MANIFEST_ENTRY)?;
    let manifest_text = String::from_utf8(manifest_bytes)
        .map_err(|_| VerifyError::ManifestParse("manifest.json is not valid UTF-8".to_string()))?;
    let manifest = Manifest::parse(&manifest_text)?;

    // 5. Integrity pass. Failure here short-circuits before the signature is
    // evaluated.
    let files_checked = check_integrity(&mut container, &manifest)?;

    // 6. Signature format check.
    let signature = TrustLevel::classify(manifest.signature.as_deref())?;

    // 7. Viewer extraction. Never a failure condition: absence carries
    // forward as None, and the text decode is lossy so a garbled document
    // still displays.
    let viewer_html = if container.contains(VIEWER_ENTRY) {
        Some(container.read_text_lossy(VIEWER_ENTRY)?)
    } else {
        None
    };

    // 8. Assemble.
    Ok(Verified {
        manifest,
        viewer_html,
        evidence: Evidence {
            files_checked,
            integrity: CheckStatus::Pass,
            signature,
        },
    })
}
