//! Ambient fixtures: account credentials and generated invalid auth keys.

use crate::config::AccountConfig;

use common::RedactedSecret;

use uuid::Uuid;

/// Length (in hex characters) of a generated invalid auth key.
pub const DEFAULT_INVALID_KEY_LENGTH: usize = 56;

/// An email/password pair submitted verbatim to the key endpoint.
///
/// The password is redacted in all Debug output and zeroized on drop.
/// Validity is decided entirely by the service.
#[derive(Debug, Clone)]
pub struct Credentials {
    email: String,
    password: RedactedSecret,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: RedactedSecret::from(password),
        }
    }

    /// Both fields empty - the service must still answer 403, not 500.
    pub fn empty() -> Self {
        Self::new("", "")
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &RedactedSecret {
        &self.password
    }
}

impl From<&AccountConfig> for Credentials {
    fn from(account: &AccountConfig) -> Self {
        Self::new(&account.email, &account.password)
    }
}

/// Random lowercase-hex key of the default length.
///
/// 224 bits of v4-uuid entropy make a collision with a key the service
/// actually issued implausible.
pub fn invalid_auth_key() -> String {
    invalid_auth_key_of_length(DEFAULT_INVALID_KEY_LENGTH)
}

/// Random lowercase-hex key of an arbitrary length.
pub fn invalid_auth_key_of_length(length: usize) -> String {
    // Each v4 uuid contributes 32 hex characters.
    let mut key = String::with_capacity(length + 32);
    while key.len() < length {
        key.push_str(&Uuid::new_v4().simple().to_string());
    }
    key.truncate(length);
    key
}
