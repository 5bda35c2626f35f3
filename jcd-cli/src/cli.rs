//! CLI structure and argument definitions.
//!
//! This module defines the main CLI structure using clap's derive macros.
//! There are no subcommands: the positional expression is resolved unless
//! one of the shell helpers (`--completions`, `--shell-init`) is requested.

use crate::commands::{InitShell, ResolveCommand};
use clap::Parser;
use clap_complete::Shell;

/// Jump to directories by abbreviated relative path expressions.
#[derive(Parser)]
#[command(name = "jcd")]
#[command(
    version,
    about = "Resolve an abbreviated path expression to a directory",
    long_about = "Resolve an abbreviated path expression to a directory.\n\n\
        The expression is split on '/'. '.' and '..' navigate as usual; any \
        other segment matches child directories whose name contains it. The \
        optional INDEX picks among the matches of the final segment.\n\n\
        A child process cannot change its parent's directory: use --shell-init \
        to install a shell function that runs jcd and cd's into its output."
)]
pub struct Cli {
    #[command(flatten)]
    pub resolve: ResolveCommand,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress all diagnostics
    #[arg(long)]
    pub quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL", conflicts_with = "shell_init")]
    pub completions: Option<Shell>,

    /// Print a shell function that wraps jcd and changes directory
    #[arg(long, value_enum, value_name = "SHELL")]
    pub shell_init: Option<InitShell>,
}
