//! Verification results and the evidence-rendering contract.

use std::fmt::Write as _;

use serde::Serialize;

use crate::manifest::Manifest;
use crate::signature::TrustLevel;

/// Outcome status of an individual verification check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Check passed.
    Pass,
    /// Check failed.
    Fail,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Fail => write!(f, "FAIL"),
        }
    }
}

/// Evidence gathered by a successful verification run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evidence {
    /// Number of payload files whose content was hashed and compared.
    pub files_checked: usize,

    /// Integrity status. Always [`CheckStatus::Pass`] on a success result;
    /// carried explicitly so reports can state it.
    pub integrity: CheckStatus,

    /// Trust classification derived from the signature envelope format.
    pub signature: TrustLevel,
}

/// A successfully verified container.
///
/// Immutable once produced; discard it when the user opens another file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verified {
    /// The parsed manifest.
    pub manifest: Manifest,

    /// Content of the embedded `viewer.html`, if the container carried one.
    pub viewer_html: Option<String>,

    /// Verification evidence.
    pub evidence: Evidence,
}

impl Verified {
    /// Returns the signer key name for display, or `"Unsigned"`.
    #[must_use]
    pub fn signer(&self) -> &str {
        match &self.evidence.signature {
            TrustLevel::Signed { key_name, .. } => key_name,
            TrustLevel::Unsigned => "Unsigned",
        }
    }

    /// Builds the facts table shown to the user: label/value rows covering
    /// the manifest summary and, when present, the producer environment.
    #[must_use]
    pub fn facts(&self) -> Vec<(&'static str, String)> {
        let manifest = &self.manifest;
        let created = manifest
            .created_at_parsed()
            .map_or_else(|| manifest.created_at.clone(), |t| t.to_rfc3339());

        let mut facts = vec![
            ("Workflow ID", manifest.workflow_id.clone()),
            ("Spec Version", manifest.spec_version.clone()),
            ("Created At", created),
            (
                "Signature Present",
                (if manifest.has_signature() { "Yes" } else { "No" }).to_string(),
            ),
            ("Signer", self.signer().to_string()),
            ("Files", manifest.file_count().to_string()),
        ];

        if let Some(env) = &manifest.environment {
            let value = |field: &Option<String>| field.clone().unwrap_or_default();
            facts.push(("OS", value(&env.os_name)));
            facts.push(("Platform", value(&env.platform)));
            facts.push(("Python", value(&env.python_version)));
        }

        facts
    }

    /// Renders the exportable plain-text verification report.
    ///
    /// States explicitly that signature checking is format-only, since the
    /// `SIGNED` label must not be mistaken for cryptographic authenticity.
    #[must_use]
    pub fn crypto_report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "CRYPTOGRAPHIC VERIFICATION REPORT");
        let _ = writeln!(out, "=================================");
        let _ = writeln!(out);

        let _ = writeln!(out, "[ INTEGRITY CHECK ]");
        let _ = writeln!(out, "Status: {}", self.evidence.integrity);
        let _ = writeln!(out, "Files Verified: {}", self.evidence.files_checked);
        let _ = writeln!(out, "Hashing Algorithm: SHA-256");
        let _ = writeln!(out);

        let _ = writeln!(out, "[ SIGNATURE ]");
        match &self.evidence.signature {
            TrustLevel::Signed {
                algorithm,
                key_name,
            } => {
                let _ = writeln!(out, "Algorithm: {algorithm}");
                let _ = writeln!(out, "Key Name: {key_name}");
                if let Some(raw) = &self.manifest.signature {
                    let _ = writeln!(out, "Raw Signature: {raw}");
                }
                let _ = writeln!(
                    out,
                    "Status: Format valid (NOT cryptographically verified)"
                );
            }
            TrustLevel::Unsigned => {
                let _ = writeln!(out, "Status: UNSIGNED");
            }
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "[ FILE MANIFEST ]");
        for (path, hash) in self.manifest.expected_hashes() {
            let _ = writeln!(out, "{path}: {hash}");
        }

        out
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::manifest::Environment;

    fn sample_verified(signature: TrustLevel) -> Verified {
        let manifest = Manifest::parse(
            r#"{
                "workflow_id": "wf-1",
                "spec_version": "1.0",
                "created_at": "2025-07-01T12:00:00+00:00",
                "file_manifest": {"data.txt": "00"},
                "signature": "ed25519:default:deadbeef"
            }"#,
        )
        .unwrap();

        Verified {
            manifest,
            viewer_html: None,
            evidence: Evidence {
                files_checked: 1,
                integrity: CheckStatus::Pass,
                signature,
            },
        }
    }

    #[test]
    fn test_check_status_display() {
        assert_eq!(CheckStatus::Pass.to_string(), "PASS");
        assert_eq!(CheckStatus::Fail.to_string(), "FAIL");
    }

    #[test]
    fn test_signer_name() {
        let signed = sample_verified(TrustLevel::Signed {
            algorithm: "ed25519".to_string(),
            key_name: "default".to_string(),
        });
        assert_eq!(signed.signer(), "default");

        let unsigned = sample_verified(TrustLevel::Unsigned);
        assert_eq!(unsigned.signer(), "Unsigned");
    }

    #[test]
    fn test_facts_include_environment_when_present() {
        let mut verified = sample_verified(TrustLevel::Unsigned);
        assert!(!verified.facts().iter().any(|(label, _)| *label == "OS"));

        verified.manifest.environment = Some(Environment {
            os_name: Some("Linux".to_string()),
            platform: Some("x86_64".to_string()),
            python_version: Some("3.12".to_string()),
        });
        let facts = verified.facts();
        assert!(
            facts
                .iter()
                .any(|(label, value)| *label == "OS" && value == "Linux")
        );
    }

    #[test]
    fn test_facts_fall_back_to_raw_created_at() {
        let mut verified = sample_verified(TrustLevel::Unsigned);
        verified.manifest.created_at = "sometime last week".to_string();
        let facts = verified.facts();
        let created = facts
            .iter()
            .find(|(label, _)| *label == "Created At")
            .unwrap();
        assert_eq!(created.1, "sometime last week");
    }

    #[test]
    fn test_crypto_report_signed_carries_caveat() {
        let report = sample_verified(TrustLevel::Signed {
            algorithm: "ed25519".to_string(),
            key_name: "default".to_string(),
        })
        .crypto_report();

        assert!(report.contains("CRYPTOGRAPHIC VERIFICATION REPORT"));
        assert!(report.contains("Files Verified: 1"));
        assert!(report.contains("NOT cryptographically verified"));
        assert!(report.contains("data.txt: 00"));
    }

    #[test]
    fn test_crypto_report_unsigned() {
        let report = sample_verified(TrustLevel::Unsigned).crypto_report();
        assert!(report.contains("Status: UNSIGNED"));
    }
}
