use common::ErrorLocation;

use petfriends_client::error::{ClientError, ConfigError};

use thiserror::Error;

/// Errors that abort a conformance run outright.
///
/// Failed conformance checks are not errors - they are outcomes,
/// accounted for in the run report. Only conditions that prevent the
/// run from proceeding at all land here.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Runner Error: {message} {location}")]
    Runner {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] ClientError),
}
