use super::*;
use crate::config::{LockfileConfig, TopicConfig};
use crate::report::Severity;

fn topic(name: &str) -> TopicConfig {
    toml::from_str(&format!("name = {name:?}\nfiles = [\"a.kt\"]\n")).unwrap()
}

fn lockfile(manifest: &str, lock: &str) -> LockfileConfig {
    LockfileConfig {
        manifest: manifest.to_string(),
        lockfile: lock.to_string(),
        message: None,
        severity: Severity::Warning,
    }
}

#[test]
fn default_config_is_valid() {
    assert!(validate_config_semantics(&Config::default()).is_ok());
}

#[test]
fn blank_topic_name_is_rejected() {
    let config = Config {
        topics: vec![topic("tracks"), topic("  ")],
        ..Config::default()
    };
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("topic[1].name"));
}

#[test]
fn lockfile_same_as_manifest_is_rejected() {
    let config = Config {
        lockfiles: vec![lockfile("Cargo.toml", "Cargo.toml")],
        ..Config::default()
    };
    assert!(validate_config_semantics(&config).is_err());
}

#[test]
fn lockfile_paths_are_rejected() {
    let config = Config {
        lockfiles: vec![lockfile("web/package.json", "package-lock.json")],
        ..Config::default()
    };
    assert!(validate_config_semantics(&config).is_err());
}

#[test]
fn empty_lockfile_name_is_rejected() {
    let config = Config {
        lockfiles: vec![lockfile("Gemfile", "")],
        ..Config::default()
    };
    assert!(validate_config_semantics(&config).is_err());
}

#[test]
fn valid_lockfile_rule_passes() {
    let config = Config {
        lockfiles: vec![lockfile("package.json", "yarn.lock")],
        ..Config::default()
    };
    assert!(validate_config_semantics(&config).is_ok());
}
