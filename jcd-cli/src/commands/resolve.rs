//! Resolve a path expression to a directory.

use crate::error::CliError;
use crate::utils::{current_dir, load_settings, GlobalOptions};
use clap::Args;
use jcd::{CaseSensitivity, Config, ListingOrder, PathExpression, Resolver};

/// Resolve an expression from the current directory and print the result.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path expression; segments are separated by '/'
    #[arg(
        value_name = "EXPRESSION",
        required_unless_present_any = ["completions", "shell_init"]
    )]
    pub expression: Option<String>,

    /// Zero-based index among the matches of the final segment
    #[arg(value_name = "INDEX", default_value_t = 0)]
    pub index: usize,

    /// Match patterns case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Bypass ignore files and configured ignore patterns
    #[arg(short = 'x', long)]
    pub no_ignore: bool,

    /// Order in which matching directories are indexed
    #[arg(long, value_enum, value_name = "ORDER")]
    pub order: Option<ListingOrder>,

    /// Print every match of the final segment with its index
    #[arg(long, conflicts_with = "index")]
    pub list: bool,
}

impl ResolveCommand {
    /// Execute the resolution.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let raw = self
            .expression
            .as_deref()
            .ok_or_else(|| CliError::InvalidArguments("missing path expression".to_string()))?;
        let expression = PathExpression::parse(raw)?;

        let start_dir = current_dir()?;
        let settings = load_settings(&start_dir, self.overrides())?;
        if let Some(path) = &settings.ignore_file {
            log::info!("using ignore file {}", path.display());
        }

        let resolver = Resolver::from_settings(&settings)
            .with_case_sensitivity(CaseSensitivity::from_ignore_case(self.ignore_case));

        if self.list {
            let candidates = resolver.candidates(&expression, &start_dir)?;
            for (index, candidate) in candidates.iter().enumerate() {
                println!("{index}\t{}", candidate.path().display());
            }
            return Ok(());
        }

        let resolved = resolver.resolve(&expression, &start_dir, self.index)?;
        println!("{}", resolved.display());
        Ok(())
    }

    /// Flags that take precedence over the environment and config file.
    fn overrides(&self) -> Config {
        Config {
            listing_order: self.order,
            bypass_ignore: self.no_ignore.then_some(true),
            ..Config::default()
        }
    }
}
