use crate::error::ApiError;

use common::ErrorLocation;

use thiserror::Error as ThisError;

/// The two failure classes a scenario distinguishes.
///
/// `Check` means the service answered but the answer broke the contract -
/// that is the suite's product, reported as a failed conformance check.
/// `Client` means the scenario could not observe the service at all
/// (transport failure, unreadable fixture) and aborted.
#[derive(Debug, ThisError)]
pub enum ScenarioError {
    #[error("Expectation not met: {expectation} {location}")]
    Check {
        expectation: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Client(#[from] ApiError),
}

impl ScenarioError {
    /// Whether this is a failed conformance check (as opposed to an
    /// aborted scenario).
    pub fn is_check_failure(&self) -> bool {
        matches!(self, ScenarioError::Check { .. })
    }
}
