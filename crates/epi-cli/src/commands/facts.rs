//! Facts command implementation

use crate::cli::FactsArgs;
use crate::commands::load_verified;
use crate::output::OutputFormatter;
use anyhow::Result;

pub fn execute(args: &FactsArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let report = load_verified(&args.file)?;
    formatter.format_facts(&report)
}
