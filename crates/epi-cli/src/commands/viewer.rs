//! Viewer command implementation

use crate::cli::ViewerArgs;
use crate::commands::load_verified;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;

pub fn execute(args: &ViewerArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let report = load_verified(&args.file)?;

    // A container without an embedded viewer is still valid; absence is a
    // warning, not an error.
    if let Some(out) = &args.output {
        match &report.viewer_html {
            Some(html) => {
                std::fs::write(out, html)
                    .with_context(|| format!("failed to write viewer to '{}'", out.display()))?;
                formatter.format_success(&format!("viewer written to {}", out.display()));
            }
            None => formatter.format_warning("no embedded viewer found"),
        }
        return Ok(());
    }

    formatter.format_viewer(&report)
}
