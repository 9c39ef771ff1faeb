//! Integration tests for `config validate` and config discovery.

mod common;

use common::{BASIC_CONFIG, NOISY_SNAPSHOT, TestFixture};
use predicates::prelude::*;

#[test]
fn validate_reports_enabled_checks() {
    let fixture = TestFixture::new();
    fixture.create_config(BASIC_CONFIG);

    pr_guard!(fixture)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("4 check(s) enabled"));
}

#[test]
fn validate_custom_path() {
    let fixture = TestFixture::new();
    fixture.create_file("ci/pr-guard.toml", "[body]\n");

    pr_guard!(fixture)
        .args(["config", "validate", "-c", "ci/pr-guard.toml"])
        .assert()
        .success();
}

#[test]
fn validate_missing_file_fails() {
    let fixture = TestFixture::new();

    pr_guard!(fixture)
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn validate_rejects_unsupported_version() {
    let fixture = TestFixture::new();
    fixture.create_config("version = \"9\"\n");

    pr_guard!(fixture)
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported config version '9'"));
}

#[test]
fn validate_rejects_bad_glob() {
    let fixture = TestFixture::new();
    fixture.create_config("[size]\nmax_lines = 10\nexclude = [\"a/[\"]\n");

    pr_guard!(fixture)
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid glob pattern: a/["));
}

#[test]
fn validate_rejects_self_referencing_lockfile() {
    let fixture = TestFixture::new();
    fixture.create_config("[[lockfile]]\nmanifest = \"Gemfile\"\nlockfile = \"Gemfile\"\n");

    pr_guard!(fixture)
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("lockfile[0]"));
}

#[test]
#[cfg(target_os = "linux")]
fn user_config_is_used_when_no_local_config() {
    let fixture = TestFixture::new();
    fixture.create_file(".xdg/pr-guard/config.toml", "[labels]\ndo_not_merge = [\"wip\"]\n");
    fixture.create_snapshot(NOISY_SNAPSHOT);

    pr_guard!(fixture)
        .args(["check", "pr.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Summary: 1 error, 0 warnings, 0 messages"));
}

#[test]
#[cfg(target_os = "linux")]
fn local_config_wins_over_user_config() {
    let fixture = TestFixture::new();
    fixture.create_file(".xdg/pr-guard/config.toml", "[labels]\ndo_not_merge = [\"wip\"]\n");
    fixture.create_config("[body]\nmin_length = 1\n");
    fixture.create_snapshot(NOISY_SNAPSHOT);

    pr_guard!(fixture)
        .args(["check", "pr.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary: 0 errors, 1 warning, 0 messages"));
}
