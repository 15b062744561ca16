//! Verify command implementation

use crate::cli::VerifyArgs;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use epi_core::verify_container;

pub fn execute(args: &VerifyArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("failed to read '{}'", args.file.display()))?;

    match verify_container(&bytes) {
        Ok(report) => {
            formatter.format_verification_result(&report)?;
            Ok(())
        }
        Err(error) => {
            formatter.format_verification_failure(&error)?;
            bail!("container verification failed ({})", error.category())
        }
    }
}
