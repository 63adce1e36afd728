//! Suite configuration: where the service lives and which fixture
//! accounts drive it.
//!
//! Loaded from `config.json` with defaults for anything missing, then
//! overridden by environment variables so CI can point the suite at a
//! different deployment without touching the file.

use crate::PETFRIENDS_BASE_URL;
use crate::error::ConfigError;

use common::ErrorLocation;

use std::env;
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_VERSION: u32 = 1;

pub const ENV_BASE_URL: &str = "PETFRIENDS_BASE_URL";
pub const ENV_VALID_EMAIL: &str = "PETFRIENDS_EMAIL";
pub const ENV_VALID_PASSWORD: &str = "PETFRIENDS_PASSWORD";

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// One fixture account: email/password submitted verbatim.
///
/// These are published test fixtures, not secrets - they live in the
/// config file in the clear. Wrapping into a redacted credential happens
/// at the point of use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSet {
    /// Account the service recognizes.
    #[serde(default = "default_valid_account")]
    pub valid: AccountConfig,
    /// Account the service must reject.
    #[serde(default = "default_invalid_account")]
    pub invalid: AccountConfig,
}

impl Default for AccountSet {
    fn default() -> Self {
        Self {
            valid: default_valid_account(),
            invalid: default_invalid_account(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureConfig {
    /// Photo uploaded when creating pets.
    #[serde(default = "default_pet_photo")]
    pub pet_photo: PathBuf,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            pet_photo: default_pet_photo(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub accounts: AccountSet,

    #[serde(default)]
    pub fixtures: FixtureConfig,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            service: ServiceConfig::default(),
            accounts: AccountSet::default(),
            fixtures: FixtureConfig::default(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_base_url() -> String {
    PETFRIENDS_BASE_URL.to_string()
}
fn default_valid_account() -> AccountConfig {
    AccountConfig {
        email: String::from("vasya@mail.com"),
        password: String::from("12345"),
    }
}
fn default_invalid_account() -> AccountConfig {
    AccountConfig {
        email: String::from("vasya@.com"),
        password: String::from("   "),
    }
}
fn default_pet_photo() -> PathBuf {
    PathBuf::from("fixtures/pet_photo.jpg")
}

// ============================================
// IMPLEMENTATION
// ============================================

impl SuiteConfig {
    /// Load config from `{config_dir}/config.json`.
    ///
    /// A missing file is not an error - the suite runs against the public
    /// deployment with the published fixture accounts by default. A file
    /// that exists but does not parse or validate IS an error: a corrupt
    /// config silently falling back to defaults would test the wrong
    /// deployment.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: SuiteConfig = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config JSON: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Apply environment overrides on top of whatever was loaded.
    ///
    /// Returns the config for chaining; validation runs again afterwards
    /// so a bad override fails as loudly as a bad file.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(base_url) = env::var(ENV_BASE_URL) {
            info!("Overriding service base URL from {ENV_BASE_URL}");
            self.service.base_url = base_url;
        }
        if let Ok(email) = env::var(ENV_VALID_EMAIL) {
            info!("Overriding valid account email from {ENV_VALID_EMAIL}");
            self.accounts.valid.email = email;
        }
        if let Ok(password) = env::var(ENV_VALID_PASSWORD) {
            info!("Overriding valid account password from {ENV_VALID_PASSWORD}");
            self.accounts.valid.password = password;
        }

        self.validate()?;
        Ok(self)
    }

    /// Save config to `{config_dir}/config.json` using atomic write
    /// (temp file + rename).
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        let json = serde_json::to_string_pretty(self).map_err(|e| {
            ConfigError::SerializeError {
                location: ErrorLocation::from(Location::caller()),
                reason: e.to_string(),
            }
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        let url = &self.service.base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid base URL: {}", url),
            });
        }

        if self.accounts.valid.email.is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: String::from("valid account email cannot be empty"),
            });
        }

        if self.fixtures.pet_photo.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: String::from("pet photo path cannot be empty"),
            });
        }

        Ok(())
    }
}

// ============================================
// .ENV DISCOVERY
// ============================================

/// Result of attempting to load a `.env` file.
#[derive(Debug)]
pub struct EnvLoadResult {
    /// Path to the loaded `.env` file, if found.
    pub path: Option<PathBuf>,
    /// Whether any `.env` file was loaded.
    pub loaded: bool,
}

/// Try to load `.env` from the current directory, then the executable
/// directory. Missing files are fine; a file that fails to parse is
/// logged and skipped.
pub fn try_load_dotenv() -> EnvLoadResult {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {:?}", path);
        return EnvLoadResult {
            path: Some(path),
            loaded: true,
        };
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let env_path = exe_dir.join(".env");
            if env_path.exists() {
                match dotenvy::from_path(&env_path) {
                    Ok(_) => {
                        info!("Loaded .env from: {:?}", env_path);
                        return EnvLoadResult {
                            path: Some(env_path),
                            loaded: true,
                        };
                    }
                    Err(e) => {
                        warn!("Failed to parse .env at {:?}: {}", env_path, e);
                    }
                }
            }
        }
    }

    debug!("No .env file found - using existing environment only");
    EnvLoadResult {
        path: None,
        loaded: false,
    }
}
