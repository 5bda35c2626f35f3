//! Integration tests for ignore files and the `-x` / `--no-ignore` flag.

mod common;

use common::{line, TestEnv};

fn ignore_tree() -> TestEnv {
    let env = TestEnv::new();
    for dir in ["node_modules", "notes", "project/node_modules"] {
        env.create_dir(dir);
    }
    env
}

#[test]
fn test_local_ignore_file() {
    let env = ignore_tree();
    env.write_file(&env.path(".jcdignore"), "# deps\n^node_modules$\n");

    env.command("")
        .arg("no")
        .assert()
        .success()
        .stdout(line(&env.path("notes")));

    env.command("").arg("node_mod").assert().code(1);
}

#[test]
fn test_no_ignore_flag_bypasses() {
    let env = ignore_tree();
    env.write_file(&env.path(".jcdignore"), "^node_modules$\n");

    for flag in ["-x", "--no-ignore"] {
        env.command("")
            .args(["node_mod", flag])
            .assert()
            .success()
            .stdout(line(&env.path("node_modules")));
    }
}

#[test]
fn test_no_ignore_environment_bypasses() {
    let env = ignore_tree();
    env.write_file(&env.path(".jcdignore"), "^node_modules$\n");

    env.command("")
        .arg("node_mod")
        .env("JCD_NO_IGNORE", "true")
        .assert()
        .success()
        .stdout(line(&env.path("node_modules")));
}

#[test]
fn test_user_ignore_file() {
    let env = ignore_tree();
    env.write_file(&env.config_home.join("jcd").join("ignore"), "^node_modules$\n");

    env.command("").arg("node_mod").assert().code(1);
}

#[test]
fn test_home_ignore_file() {
    let env = ignore_tree();
    env.write_file(&env.home.join(".jcdignore"), "^node_modules$\n");

    env.command("").arg("node_mod").assert().code(1);
}

#[test]
fn test_first_ignore_file_wins() {
    let env = ignore_tree();
    // The local file exists, so the home file is never read.
    env.write_file(&env.path(".jcdignore"), "^notes$\n");
    env.write_file(&env.home.join(".jcdignore"), "^node_modules$\n");

    env.command("")
        .arg("node_mod")
        .assert()
        .success()
        .stdout(line(&env.path("node_modules")));
    env.command("").arg("notes").assert().code(1);
}

#[test]
fn test_local_file_is_relative_to_working_directory() {
    let env = ignore_tree();
    env.write_file(&env.path(".jcdignore"), "^node_modules$\n");

    // Running from `project`, the tree-root file is not the local one
    env.command("project")
        .arg("node")
        .assert()
        .success()
        .stdout(line(&env.path("project/node_modules")));
}

#[test]
fn test_config_patterns() {
    let env = ignore_tree();
    env.write_config("ignore_patterns:\n  - '^node_modules$'\n");

    env.command("").arg("node_mod").assert().code(1);
    env.command("").args(["node_mod", "-x"]).assert().success();
}

#[test]
fn test_config_can_disable_ignore_files() {
    let env = ignore_tree();
    env.write_file(&env.path(".jcdignore"), "^node_modules$\n");
    env.write_config("use_ignore_files: false\n");

    env.command("")
        .arg("node_mod")
        .assert()
        .success()
        .stdout(line(&env.path("node_modules")));
}

#[test]
fn test_ignore_does_not_block_literals() {
    let env = ignore_tree();
    env.write_file(&env.path(".jcdignore"), "^project$\n");

    env.command("project/node_modules")
        .arg("..")
        .assert()
        .success()
        .stdout(line(&env.path("project")));
}

#[test]
fn test_invalid_ignore_lines_skipped() {
    let env = ignore_tree();
    env.write_file(&env.path(".jcdignore"), "([broken\n^node_modules$\n");

    env.command("").arg("node_mod").assert().code(1);
}
