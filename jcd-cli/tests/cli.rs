//! Integration tests for CLI surface: help, version, listing, and shell
//! helpers.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_help() {
    let env = TestEnv::new();
    env.command("")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("EXPRESSION"))
        .stdout(predicate::str::contains("--ignore-case"))
        .stdout(predicate::str::contains("--shell-init"));
}

#[test]
fn test_version() {
    let env = TestEnv::new();
    env.command("")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("jcd "));
}

#[test]
fn test_list_prints_indexed_candidates() {
    let env = TestEnv::with_navigation_tree();
    let expected = format!(
        "0\t{}\n1\t{}\n",
        env.path("parent/child1").display(),
        env.path("parent/child2").display()
    );

    env.command("parent/subdir")
        .args(["../ch", "--list", "--order", "lexical"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_list_literal_final_segment() {
    let env = TestEnv::with_navigation_tree();
    env.command("parent/child1")
        .args(["..", "--list"])
        .assert()
        .success()
        .stdout(format!("0\t{}\n", env.path("parent").display()));
}

#[test]
fn test_list_no_match() {
    let env = TestEnv::with_navigation_tree();
    env.command("parent")
        .args(["zzz", "--list"])
        .assert()
        .code(1)
        .stdout("");
}

#[test]
fn test_list_rejects_explicit_index() {
    let env = TestEnv::with_navigation_tree();
    env.command("parent")
        .args(["ch", "1", "--list"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_ignore_file_reported_from_log_mode_env() {
    let env = TestEnv::with_navigation_tree();
    env.write_file(&env.path("parent/.jcdignore"), "^subdir$\n");

    env.command("parent")
        .arg("ch")
        .env("JCD_LOG_MODE", "verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO: using ignore file"));
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();
    env.command("")
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_jcd"))
        .stderr(predicate::str::contains("# Generating bash completion script"));
}

#[test]
fn test_completions_quiet_has_no_hint() {
    let env = TestEnv::new();
    env.command("")
        .args(["--completions", "zsh", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef jcd"))
        .stderr("");
}

#[test]
fn test_shell_init_bash() {
    let env = TestEnv::new();
    env.command("")
        .args(["--shell-init", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("jcd() {"))
        .stdout(predicate::str::contains("builtin cd"));
}

#[test]
fn test_shell_init_fish() {
    let env = TestEnv::new();
    env.command("")
        .args(["--shell-init", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("function jcd"));
}

#[test]
fn test_shell_init_unknown_shell() {
    let env = TestEnv::new();
    env.command("")
        .args(["--shell-init", "tcsh"])
        .assert()
        .code(2);
}

#[test]
fn test_shell_helpers_conflict() {
    let env = TestEnv::new();
    env.command("")
        .args(["--shell-init", "bash", "--completions", "bash"])
        .assert()
        .code(2);
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let env = TestEnv::with_navigation_tree();
    env.command("parent/child1")
        .args(["../child2", "--verbose"])
        .assert()
        .success()
        .stdout(format!("{}\n", env.path("parent/child2").display()))
        .stderr(predicate::str::contains("DEBUG: resolved '../child2'"));
}

#[test]
fn test_debug_environment_switch() {
    let env = TestEnv::with_navigation_tree();
    env.command("parent/child1")
        .arg("..")
        .env("JCD_DEBUG", "1")
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG:"));
}
