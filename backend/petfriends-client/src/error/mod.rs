pub mod api;
pub mod config;
pub mod scenario;

pub use api::ApiError;
pub use config::ConfigError;
pub use scenario::ScenarioError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scenario(#[from] ScenarioError),
}
