//! Output rendering for verification results, manifest facts, crypto
//! reports, and viewer extraction.
//!
//! Two renderings share the [`OutputFormatter`] trait: a styled terminal
//! view for people and a line-of-JSON view for scripts.

mod formatter;
mod human;
mod json;

pub use formatter::OutputFormatter;

use human::HumanFormatter;
use json::JsonFormatter;

/// Selects the formatter from the global `--json`, `--verbose`, and
/// `--quiet` flags. JSON mode ignores the verbosity flags.
pub fn create_formatter(json: bool, verbose: bool, quiet: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(HumanFormatter::new(verbose, quiet))
    }
}
