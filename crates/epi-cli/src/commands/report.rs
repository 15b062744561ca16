//! Report command implementation

use crate::cli::ReportArgs;
use crate::commands::load_verified;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;

pub fn execute(args: &ReportArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let report = load_verified(&args.file)?;

    if let Some(out) = &args.output {
        std::fs::write(out, report.crypto_report())
            .with_context(|| format!("failed to write report to '{}'", out.display()))?;
        formatter.format_success(&format!("report written to {}", out.display()));
        return Ok(());
    }

    formatter.format_report(&report)
}
