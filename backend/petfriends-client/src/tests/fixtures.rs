// Unit tests for fixtures: credentials handling and invalid-key generation

use crate::config::AccountConfig;
use crate::fixtures::{
    Credentials, DEFAULT_INVALID_KEY_LENGTH, invalid_auth_key, invalid_auth_key_of_length,
};

// ============================================
// UNIT TESTS: Invalid Auth Key Generation
// ============================================

/// **VALUE**: Verifies the generated key matches the documented fixture
/// shape: 56 lowercase hex characters.
///
/// **WHY THIS MATTERS**: The negative scenarios stand on this key never
/// colliding with anything the service issued. Wrong length or charset
/// could turn "unissued key" into "malformed header" and test a
/// different failure path than intended.
#[test]
fn given_default_length_when_generating_key_then_56_hex_chars() {
    let key = invalid_auth_key();

    assert_eq!(key.len(), DEFAULT_INVALID_KEY_LENGTH);
    assert!(
        key.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
        "key should be lowercase hex: {key}"
    );
}

#[test]
fn given_arbitrary_lengths_when_generating_key_then_length_is_honored() {
    // Odd lengths and lengths above one uuid's worth of hex both work.
    for length in [1, 8, 32, 33, 57, 128] {
        assert_eq!(invalid_auth_key_of_length(length).len(), length);
    }
}

#[test]
fn given_two_generations_when_comparing_then_keys_differ() {
    assert_ne!(invalid_auth_key(), invalid_auth_key());
}

// ============================================
// UNIT TESTS: Credentials
// ============================================

/// **VALUE**: Verifies the password never leaks through Debug.
///
/// **WHY THIS MATTERS**: Scenario failures get logged with their inputs;
/// the redaction is what makes that safe to do.
#[test]
fn given_credentials_when_debug_formatted_then_password_is_redacted() {
    let credentials = Credentials::new("vasya@mail.com", "12345");
    let debug = format!("{credentials:?}");

    assert!(debug.contains("vasya@mail.com"));
    assert!(debug.contains("REDACTED"));
    assert!(!debug.contains("12345"), "password must not appear: {debug}");
}

#[test]
fn given_empty_credentials_when_constructed_then_both_fields_empty() {
    let credentials = Credentials::empty();

    assert!(credentials.email().is_empty());
    assert!(credentials.password().is_empty());
}

#[test]
fn given_account_config_when_converted_then_fields_carry_over() {
    let account = AccountConfig {
        email: String::from("user@example.com"),
        password: String::from("hunter2"),
    };
    let credentials = Credentials::from(&account);

    assert_eq!(credentials.email(), "user@example.com");
    assert_eq!(credentials.password().as_str(), "hunter2");
    assert_eq!(credentials.password().len(), 7);
}
