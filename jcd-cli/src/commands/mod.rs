//! CLI command implementations.
//!
//! - `resolve`: Resolve an expression and print the directory (default)
//! - `completions`: Generate shell completion scripts
//! - `shell_init`: Print the `cd` wrapper function for a shell

pub mod completions;
pub mod resolve;
pub mod shell_init;

pub use completions::CompletionsCommand;
pub use resolve::ResolveCommand;
pub use shell_init::{InitShell, ShellInitCommand};
