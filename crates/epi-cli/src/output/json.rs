//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use epi_core::Mismatch;
use epi_core::TrustLevel;
use epi_core::Verified;
use epi_core::VerifyError;
use serde::Serialize;
use std::io::Write;
use std::io::{self};

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

#[derive(Serialize)]
struct VerificationOutput<'a> {
    workflow_id: &'a str,
    spec_version: &'a str,
    files_checked: usize,
    integrity: epi_core::CheckStatus,
    signature: &'a TrustLevel,
    /// `SIGNED` reflects envelope format validity only; the signature is
    /// never cryptographically verified.
    signature_format_only: bool,
    viewer_embedded: bool,
}

impl<'a> VerificationOutput<'a> {
    fn from_report(report: &'a Verified) -> Self {
        Self {
            workflow_id: &report.manifest.workflow_id,
            spec_version: &report.manifest.spec_version,
            files_checked: report.evidence.files_checked,
            integrity: report.evidence.integrity,
            signature: &report.evidence.signature,
            signature_format_only: true,
            viewer_embedded: report.viewer_html.is_some(),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_verification_result(&self, report: &Verified) -> Result<()> {
        let output = JsonOutput::success("verify", VerificationOutput::from_report(report));
        Self::output(&output)
    }

    fn format_verification_failure(&self, error: &VerifyError) -> Result<()> {
        #[derive(Serialize)]
        struct FailureDetails<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            mismatches: Option<&'a [Mismatch]>,
        }

        let details = error.mismatches().map(|mismatches| FailureDetails {
            mismatches: Some(mismatches),
        });

        let output = JsonOutput::failure("verify", error.to_string(), error.category(), details);
        Self::output(&output)
    }

    fn format_facts(&self, report: &Verified) -> Result<()> {
        #[derive(Serialize)]
        struct Fact {
            label: &'static str,
            value: String,
        }

        let facts: Vec<Fact> = report
            .facts()
            .into_iter()
            .map(|(label, value)| Fact { label, value })
            .collect();

        let output = JsonOutput::success("facts", facts);
        Self::output(&output)
    }

    fn format_report(&self, report: &Verified) -> Result<()> {
        #[derive(Serialize)]
        struct ReportOutput {
            report: String,
        }

        let output = JsonOutput::success(
            "report",
            ReportOutput {
                report: report.crypto_report(),
            },
        );
        Self::output(&output)
    }

    fn format_viewer(&self, report: &Verified) -> Result<()> {
        #[derive(Serialize)]
        struct ViewerOutput<'a> {
            embedded: bool,
            #[serde(skip_serializing_if = "Option::is_none")]
            viewer_html: Option<&'a str>,
        }

        let output = JsonOutput::success(
            "viewer",
            ViewerOutput {
                embedded: report.viewer_html.is_some(),
                viewer_html: report.viewer_html.as_deref(),
            },
        );
        Self::output(&output)
    }

    fn format_success(&self, _message: &str) {
        // Structured data already carries the outcome.
    }

    fn format_warning(&self, message: &str) {
        let _ = writeln!(io::stderr(), "warning: {message}");
    }
}
