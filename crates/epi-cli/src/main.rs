//! EPI CLI - Command-line viewer and verifier for EPI evidence containers.

mod cli;
mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match &cli.command {
        cli::Commands::Verify(args) => commands::verify::execute(args, &*formatter),
        cli::Commands::Facts(args) => commands::facts::execute(args, &*formatter),
        cli::Commands::Report(args) => commands::report::execute(args, &*formatter),
        cli::Commands::Viewer(args) => commands::viewer::execute(args, &*formatter),
        cli::Commands::Completion { shell } => {
            commands::completion::execute(*shell);
            Ok(())
        }
    }
}
