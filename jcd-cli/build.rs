//! Build script for jcd-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs and
/// src/commands/resolve.rs.
fn build_cli() -> Command {
    Command::new("jcd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve an abbreviated path expression to a directory")
        .long_about(
            "Resolve an abbreviated path expression to a directory. The expression is \
             split on '/'; '.' and '..' navigate as usual and any other segment matches \
             child directories whose name contains it.",
        )
        .arg(
            Arg::new("expression")
                .value_name("EXPRESSION")
                .help("Path expression; segments are separated by '/'"),
        )
        .arg(
            Arg::new("index")
                .value_name("INDEX")
                .default_value("0")
                .help("Zero-based index among the matches of the final segment"),
        )
        .arg(
            Arg::new("ignore-case")
                .short('i')
                .long("ignore-case")
                .help("Match patterns case-insensitively")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-ignore")
                .short('x')
                .long("no-ignore")
                .help("Bypass ignore files and configured ignore patterns")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("order")
                .long("order")
                .value_name("ORDER")
                .value_parser(["filesystem", "lexical", "quality"])
                .help("Order in which matching directories are indexed"),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .help("Print every match of the final segment with its index")
                .conflicts_with("index")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress all diagnostics")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .help("Print a shell completion script and exit"),
        )
        .arg(
            Arg::new("shell-init")
                .long("shell-init")
                .value_name("SHELL")
                .value_parser(["bash", "zsh", "fish"])
                .help("Print a shell function that wraps jcd and changes directory"),
        )
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("jcd.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
