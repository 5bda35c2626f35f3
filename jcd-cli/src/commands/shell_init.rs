//! Shell integration.
//!
//! A process cannot change its parent shell's working directory, so the
//! binary only prints the resolved path. The function printed here runs the
//! binary and `cd`s into its output when that output is a directory, and
//! otherwise passes it through (`--list`, `--help`).

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::ValueEnum;
use std::fmt;

/// Shells with a wrapper function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InitShell {
    /// GNU Bash
    Bash,
    /// Z shell
    Zsh,
    /// Fish
    Fish,
}

impl fmt::Display for InitShell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bash => write!(f, "bash"),
            Self::Zsh => write!(f, "zsh"),
            Self::Fish => write!(f, "fish"),
        }
    }
}

const POSIX_FUNCTION: &str = r#"jcd() {
    local target
    target="$(command jcd "$@")" || return $?
    if [ -d "$target" ]; then
        builtin cd -- "$target"
    elif [ -n "$target" ]; then
        printf '%s\n' "$target"
    fi
}
"#;

const FISH_FUNCTION: &str = r#"function jcd
    set -l target (command jcd $argv)
    or return $status
    if test (count $target) -eq 1; and test -d "$target"
        builtin cd -- $target
    else if test (count $target) -gt 0
        printf '%s\n' $target
    end
end
"#;

/// Print the wrapper function for a shell.
pub struct ShellInitCommand {
    /// Target shell.
    pub shell: InitShell,
}

impl ShellInitCommand {
    /// The function definition for the target shell.
    #[must_use]
    pub fn script(&self) -> &'static str {
        match self.shell {
            InitShell::Bash | InitShell::Zsh => POSIX_FUNCTION,
            InitShell::Fish => FISH_FUNCTION,
        }
    }

    /// Execute the shell-init command.
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        log::debug!("printing {} wrapper function", self.shell);
        print!("{}", self.script());
        Ok(())
    }
}
