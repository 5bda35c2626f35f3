//! Shell completion generation.
//!
//! Generates completion scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "jcd";

/// Generate shell completion scripts.
pub struct CompletionsCommand {
    /// Shell to generate completions for.
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            print_hint(self.shell);
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

fn print_hint(shell: Shell) {
    eprintln!("# Generating {shell} completion script");
    eprintln!("# Run the following command to enable completions:");

    match shell {
        Shell::Bash => {
            eprintln!(
                "#   jcd --completions bash > ~/.local/share/bash-completion/completions/jcd"
            );
            eprintln!("# Or source it directly in ~/.bashrc:");
            eprintln!("#   eval \"$(jcd --completions bash)\"");
        }
        Shell::Zsh => {
            eprintln!("#   jcd --completions zsh > ~/.zsh/completions/_jcd");
            eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
        }
        Shell::Fish => {
            eprintln!("#   jcd --completions fish > ~/.config/fish/completions/jcd.fish");
        }
        Shell::PowerShell => {
            eprintln!("#   jcd --completions powershell | Out-String | Invoke-Expression");
        }
        _ => {}
    }

    eprintln!();
}
