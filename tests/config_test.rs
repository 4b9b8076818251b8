//! Integration tests for ShellSettings layered loading.
//!
//! Note: these tests pass the global file location explicitly and stop before
//! the environment layer, so neither a real `$XDG_CONFIG_HOME/cmdkit/cmdkit.toml`
//! nor `CMDKIT_*` variables in the test process interfere.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use cmdkit::config::{SettingsError, ShellSettings};

fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn given_no_files_when_loading_then_defaults_are_used() {
    let settings = ShellSettings::load_files(None, None).expect("load settings");

    assert_eq!(settings, ShellSettings::default());
}

#[test]
fn given_global_file_when_loading_then_its_values_override_defaults() {
    let dir = TempDir::new().unwrap();
    let global = write_config(&dir, "cmdkit.toml", "prompt = \"$ \"\nshow_ok = true\n");

    let settings = ShellSettings::load_files(Some(&global), None).expect("load settings");

    assert_eq!(settings.prompt, "$ ");
    assert!(settings.show_ok);
    assert_eq!(
        settings.not_found_message,
        ShellSettings::default().not_found_message
    );
}

#[test]
fn given_global_and_explicit_files_when_loading_then_explicit_wins() {
    let dir = TempDir::new().unwrap();
    let global = write_config(&dir, "global.toml", "prompt = \"global> \"\ncolor = false\n");
    let explicit = write_config(&dir, "local.toml", "prompt = \"local> \"\n");

    let settings =
        ShellSettings::load_files(Some(&global), Some(&explicit)).expect("load settings");

    assert_eq!(settings.prompt, "local> ");
    assert!(!settings.color, "unspecified field keeps the global value");
}

#[test]
fn given_missing_explicit_file_when_loading_then_read_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");

    let err = ShellSettings::load_files(None, Some(&missing)).unwrap_err();

    assert!(matches!(err, SettingsError::Read { .. }));
}

#[test]
fn given_malformed_toml_when_loading_then_parse_error() {
    let dir = TempDir::new().unwrap();
    let bad = write_config(&dir, "bad.toml", "prompt = [unclosed\n");

    let err = ShellSettings::load_files(None, Some(&bad)).unwrap_err();

    assert!(matches!(err, SettingsError::Parse { .. }));
    assert!(err.to_string().starts_with("parse "));
}
