// Unit tests for suite configuration
// Load/save/validate behavior plus the environment override layer.

use crate::PETFRIENDS_BASE_URL;
use crate::config::{
    ENV_BASE_URL, ENV_VALID_EMAIL, ENV_VALID_PASSWORD, SuiteConfig,
};
use crate::error::ConfigError;

use std::env;

use serial_test::serial;

// ============================================
// UNIT TESTS: Defaults & Validation
// ============================================

#[test]
fn given_default_config_when_validated_then_passes() {
    let config = SuiteConfig::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.service.base_url, PETFRIENDS_BASE_URL);
    assert_eq!(config.accounts.valid.email, "vasya@mail.com");
}

#[test]
fn given_bad_url_scheme_when_validated_then_rejected() {
    let mut config = SuiteConfig::default();
    config.service.base_url = String::from("ftp://petfriends.example");

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn given_out_of_range_version_when_validated_then_rejected() {
    let mut config = SuiteConfig::default();

    config.version = 0;
    assert!(config.validate().is_err());

    config.version = 99;
    assert!(config.validate().is_err());
}

#[test]
fn given_empty_valid_email_when_validated_then_rejected() {
    let mut config = SuiteConfig::default();
    config.accounts.valid.email = String::new();

    assert!(config.validate().is_err());
}

#[test]
fn given_empty_photo_path_when_validated_then_rejected() {
    let mut config = SuiteConfig::default();
    config.fixtures.pet_photo = std::path::PathBuf::new();

    assert!(config.validate().is_err());
}

// ============================================
// UNIT TESTS: Load & Save
// ============================================

/// **VALUE**: Verifies the save/load round trip through config.json.
///
/// **BUG THIS CATCHES**: A field rename in the serde structs would write
/// configs that silently reload as defaults.
#[test]
fn given_saved_config_when_loaded_then_round_trips() {
    let dir = tempfile::tempdir().expect("temp dir");

    let mut config = SuiteConfig::default();
    config.service.base_url = String::from("http://127.0.0.1:8080/");
    config.accounts.valid.email = String::from("other@mail.com");
    config.save(dir.path()).expect("save should succeed");

    let loaded = SuiteConfig::load(dir.path()).expect("load should succeed");
    assert_eq!(loaded.service.base_url, "http://127.0.0.1:8080/");
    assert_eq!(loaded.accounts.valid.email, "other@mail.com");
    assert_eq!(loaded.accounts.invalid.email, "vasya@.com");
}

#[test]
fn given_missing_file_when_loaded_then_defaults_returned() {
    let dir = tempfile::tempdir().expect("temp dir");

    let loaded = SuiteConfig::load(dir.path()).expect("missing file is not an error");
    assert_eq!(loaded.service.base_url, PETFRIENDS_BASE_URL);
}

#[test]
fn given_corrupt_file_when_loaded_then_parse_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("config.json"), "{ not json").expect("write");

    assert!(matches!(
        SuiteConfig::load(dir.path()),
        Err(ConfigError::ParseError { .. })
    ));
}

/// A partial file fills everything it omits from the defaults.
#[test]
fn given_partial_file_when_loaded_then_defaults_fill_gaps() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"service": {"base_url": "http://localhost:9999/"}}"#,
    )
    .expect("write");

    let loaded = SuiteConfig::load(dir.path()).expect("partial file should load");
    assert_eq!(loaded.service.base_url, "http://localhost:9999/");
    assert_eq!(loaded.accounts.valid.email, "vasya@mail.com");
    assert_eq!(loaded.version, 1);
}

// ============================================
// UNIT TESTS: Environment Overrides
// ============================================

/// **VALUE**: Verifies env vars take precedence over the loaded file.
///
/// **WHY THIS MATTERS**: CI points the suite at staging deployments
/// through the environment; if the override layer regresses, CI would
/// quietly test production instead.
#[test]
#[serial]
fn given_env_overrides_when_applied_then_config_reflects_them() {
    unsafe {
        env::set_var(ENV_BASE_URL, "https://staging.petfriends.example/");
        env::set_var(ENV_VALID_EMAIL, "ci@mail.com");
        env::set_var(ENV_VALID_PASSWORD, "ci-secret");
    }

    let config = SuiteConfig::default()
        .with_env_overrides()
        .expect("overrides should validate");

    unsafe {
        env::remove_var(ENV_BASE_URL);
        env::remove_var(ENV_VALID_EMAIL);
        env::remove_var(ENV_VALID_PASSWORD);
    }

    assert_eq!(config.service.base_url, "https://staging.petfriends.example/");
    assert_eq!(config.accounts.valid.email, "ci@mail.com");
    assert_eq!(config.accounts.valid.password, "ci-secret");
}

#[test]
#[serial]
fn given_invalid_env_override_when_applied_then_validation_fails() {
    unsafe {
        env::set_var(ENV_BASE_URL, "not-a-url");
    }

    let result = SuiteConfig::default().with_env_overrides();

    unsafe {
        env::remove_var(ENV_BASE_URL);
    }

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
#[serial]
fn given_no_env_vars_when_applied_then_config_unchanged() {
    unsafe {
        env::remove_var(ENV_BASE_URL);
        env::remove_var(ENV_VALID_EMAIL);
        env::remove_var(ENV_VALID_PASSWORD);
    }

    let config = SuiteConfig::default()
        .with_env_overrides()
        .expect("no-op overrides should validate");

    assert_eq!(config.service.base_url, PETFRIENDS_BASE_URL);
}
