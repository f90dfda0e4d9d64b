//! Integration tests for the CLI surface of the `gw` binary.
//!
//! Each test spawns the real binary with a scrubbed environment: no ambient
//! `GITHUB_TOKEN`, and the config path pinned to a temp location so the
//! user's real config is never read or written.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// A `gw` invocation isolated from the host environment.
fn gw(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gw").expect("binary builds");
    cmd.env_remove("GITHUB_TOKEN")
        .env("GROUNDWORK_CONFIG", config_dir.child("config.toml").path());
    cmd
}

#[test]
fn init_without_token_fails_with_guidance() {
    let config = TempDir::new().unwrap();
    gw(&config)
        .args(["init", "demo-app", "--stack", "express", "--no-interactive"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No GitHub token found"))
        .stderr(predicate::str::contains("gw auth"));
}

#[test]
fn init_without_name_fails_in_non_interactive_mode() {
    let config = TempDir::new().unwrap();
    gw(&config)
        .env("GITHUB_TOKEN", "ghp_test")
        .args(["init", "--stack", "express", "--no-interactive"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("repository name required"));
}

#[test]
fn init_rejects_unimplemented_stack_before_any_network_call() {
    let config = TempDir::new().unwrap();
    gw(&config)
        .env("GITHUB_TOKEN", "ghp_test")
        .args(["init", "demo-app", "--stack", "nextjs", "--no-interactive"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not implemented yet"))
        .stderr(predicate::str::contains("express"));
}

#[test]
fn init_rejects_invalid_repository_name_at_parse_time() {
    let config = TempDir::new().unwrap();
    gw(&config)
        .args(["init", "bad name"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn init_rejects_unknown_remote_scheme() {
    let config = TempDir::new().unwrap();
    gw(&config)
        .args(["init", "demo-app", "--remote", "ftp"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn private_and_public_flags_conflict() {
    let config = TempDir::new().unwrap();
    gw(&config)
        .args(["init", "demo-app", "--private", "--public"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--public"));
}

#[test]
fn stacks_lists_the_registry_with_availability() {
    let config = TempDir::new().unwrap();
    gw(&config)
        .arg("stacks")
        .assert()
        .success()
        .stdout(predicate::str::contains("express"))
        .stdout(predicate::str::contains("nextjs (not implemented yet)"));
}

#[test]
fn quiet_stacks_prints_only_available_names() {
    let config = TempDir::new().unwrap();
    gw(&config)
        .args(["--quiet", "stacks"])
        .assert()
        .success()
        .stdout("express\n");
}

#[test]
fn auth_status_reports_not_authenticated() {
    let config = TempDir::new().unwrap();
    gw(&config)
        .args(["--quiet", "auth", "--status"])
        .assert()
        .success()
        .stdout("not_authenticated\n");
}

#[test]
fn auth_status_honors_the_environment_token() {
    let config = TempDir::new().unwrap();
    gw(&config)
        .env("GITHUB_TOKEN", "ghp_test")
        .args(["--quiet", "auth", "--status"])
        .assert()
        .success()
        .stdout("authenticated\n");
}

#[test]
fn auth_stores_and_logout_removes_the_token() {
    let config = TempDir::new().unwrap();

    gw(&config)
        .args(["auth", "--token", "ghp_test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Token stored"))
        // The token value itself must never be echoed
        .stdout(predicate::str::contains("ghp_test").not());

    config
        .child("config.toml")
        .assert(predicate::str::contains("ghp_test"));

    gw(&config)
        .args(["--quiet", "auth", "--status"])
        .assert()
        .success()
        .stdout("authenticated\n");

    gw(&config).args(["auth", "--logout"]).assert().success();

    gw(&config)
        .args(["--quiet", "auth", "--status"])
        .assert()
        .success()
        .stdout("not_authenticated\n");
}

#[test]
fn auth_rejects_whitespace_tokens() {
    let config = TempDir::new().unwrap();
    gw(&config)
        .args(["auth", "--token", "ghp test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("whitespace"));
}

#[test]
fn completion_emits_a_bash_script() {
    let config = TempDir::new().unwrap();
    gw(&config)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("groundwork"));
}

#[test]
fn help_documents_the_workflow() {
    let config = TempDir::new().unwrap();
    gw(&config)
        .args(["init", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WORKFLOW EXAMPLES"))
        .stdout(predicate::str::contains("GITHUB_TOKEN"));
}

#[test]
fn version_flag_works() {
    let config = TempDir::new().unwrap();
    gw(&config)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
