//! Main entry point for the jcd CLI.
//!
//! Resolves a path expression from the current directory and prints the
//! absolute directory on stdout. Diagnostics go to stderr only, so the
//! output can be fed straight to `cd`.

use clap::Parser;
use jcd_cli::commands::{CompletionsCommand, ShellInitCommand};
use jcd_cli::utils::GlobalOptions;
use jcd_cli::Cli;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = jcd::init_logger(cli.verbose, cli.quiet);
    logger.install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    let result = if let Some(shell) = cli.completions {
        CompletionsCommand { shell }.execute(&global)
    } else if let Some(shell) = cli.shell_init {
        ShellInitCommand { shell }.execute(&global)
    } else {
        cli.resolve.execute(&global)
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            logger.error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}
