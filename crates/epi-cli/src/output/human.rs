//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use epi_core::TrustLevel;
use epi_core::Verified;
use epi_core::VerifyError;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn write_line(&self, line: &str) {
        let _ = self.term.write_line(line);
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_verification_result(&self, report: &Verified) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            self.write_line(&format!(
                "Container verification: {}",
                style("PASSED").green().bold()
            ));
        } else {
            self.write_line("Container verification: PASSED");
        }

        self.write_line(&format!(
            "  Integrity: {} ({} file(s) checked)",
            report.evidence.integrity, report.evidence.files_checked
        ));

        match &report.evidence.signature {
            TrustLevel::Signed {
                algorithm,
                key_name,
            } => {
                self.write_line(&format!(
                    "  Signature: SIGNED ({algorithm}, key '{key_name}')"
                ));
                let caveat = "format checked only; NOT cryptographically verified";
                if self.use_colors {
                    self.write_line(&format!("  {} {caveat}", style("⚠").yellow().bold()));
                } else {
                    self.write_line(&format!("  WARNING: {caveat}"));
                }
            }
            TrustLevel::Unsigned => {
                self.write_line("  Signature: UNSIGNED");
            }
        }

        self.write_line(&format!(
            "  Embedded viewer: {}",
            if report.viewer_html.is_some() {
                "present"
            } else {
                "absent"
            }
        ));

        if self.verbose {
            self.write_line(&format!("  Workflow: {}", report.manifest.workflow_id));
            self.write_line(&format!("  Spec version: {}", report.manifest.spec_version));
        }

        Ok(())
    }

    fn format_verification_failure(&self, error: &VerifyError) -> Result<()> {
        // Always shown, even in quiet mode.
        if self.use_colors {
            self.write_line(&format!(
                "Container verification: {}",
                style("FAILED").red().bold()
            ));
        } else {
            self.write_line("Container verification: FAILED");
        }

        self.write_line(&format!("  Category: {}", error.category()));
        self.write_line(&format!("  {error}"));

        if let Some(mismatches) = error.mismatches() {
            self.write_line("");
            self.write_line("Mismatches:");
            for mismatch in mismatches {
                self.write_line(&format!("  - {mismatch}"));
            }
        }

        Ok(())
    }

    fn format_facts(&self, report: &Verified) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let facts = report.facts();
        let width = facts.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

        for (label, value) in facts {
            if self.use_colors {
                self.write_line(&format!(
                    "{:>width$}  {}",
                    style(label).bold(),
                    value,
                    width = width
                ));
            } else {
                self.write_line(&format!("{label:>width$}  {value}"));
            }
        }

        Ok(())
    }

    fn format_report(&self, report: &Verified) -> Result<()> {
        // The report body is the export artifact; print it untouched even in
        // quiet mode.
        self.write_line(&report.crypto_report());
        Ok(())
    }

    fn format_viewer(&self, report: &Verified) -> Result<()> {
        match &report.viewer_html {
            Some(html) => self.write_line(html),
            None => self.format_warning("no embedded viewer found"),
        }
        Ok(())
    }

    fn format_success(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            self.write_line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            self.write_line(message);
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            self.write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            self.write_line(&format!("WARNING: {message}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_construction() {
        let formatter = HumanFormatter::new(true, false);
        assert!(formatter.verbose);
        assert!(!formatter.quiet);
    }
}
