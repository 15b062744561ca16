//! Output formatter trait for CLI results.

use anyhow::Result;
use epi_core::Verified;
use epi_core::VerifyError;
use serde::Serialize;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format a successful verification result
    fn format_verification_result(&self, report: &Verified) -> Result<()>;

    /// Format a verification failure with its category and details
    fn format_verification_failure(&self, error: &VerifyError) -> Result<()>;

    /// Format the facts table of a verified container
    fn format_facts(&self, report: &Verified) -> Result<()>;

    /// Format the exportable cryptographic verification report
    fn format_report(&self, report: &Verified) -> Result<()>;

    /// Format the embedded viewer document, or its absence
    fn format_viewer(&self, report: &Verified) -> Result<()>;

    /// Format success message
    fn format_success(&self, message: &str);

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Machine-stable failure category code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
            code: None,
        }
    }

    pub fn failure(
        operation: impl Into<String>,
        error: impl Into<String>,
        code: &'static str,
        details: Option<T>,
    ) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Error,
            data: details,
            error: Some(error.into()),
            code: Some(code),
        }
    }
}
