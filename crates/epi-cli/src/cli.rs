//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "epi")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify a container's structure, integrity, and signature format
    Verify(VerifyArgs),
    /// Show the facts table of a verified container
    Facts(FactsArgs),
    /// Export the plain-text cryptographic verification report
    Report(ReportArgs),
    /// Extract the embedded viewer document
    Viewer(ViewerArgs),
    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args)]
pub struct VerifyArgs {
    /// Path to the .epi container file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(clap::Args)]
pub struct FactsArgs {
    /// Path to the .epi container file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(clap::Args)]
pub struct ReportArgs {
    /// Path to the .epi container file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "OUT")]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct ViewerArgs {
    /// Path to the .epi container file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write the viewer document to a file instead of stdout
    #[arg(short, long, value_name = "OUT")]
    pub output: Option<PathBuf>,
}
