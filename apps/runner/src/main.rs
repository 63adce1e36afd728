use conformance::error::RunnerError;
use conformance::logger::initialize as logger_initialize;
use conformance::report::{Outcome, RunReport};

use petfriends_client::config::{SuiteConfig, try_load_dotenv};
use petfriends_client::error::ScenarioError;
use petfriends_client::scenarios::{ScenarioContext, catalog};

use common::ErrorLocation;

use std::panic::Location;
use std::path::Path;
use std::process::ExitCode;

use log::{error, info, warn};

const LOG_DIRECTORY: &str = "logs";

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("conformance run aborted: {e}");
            ExitCode::FAILURE
        }
    }
}

/// One scenario runs to completion before the next starts: the remote
/// inventory is a single global resource, so the runner stays on a
/// current-thread runtime and never overlaps scenarios.
fn run() -> Result<bool, RunnerError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| RunnerError::Runner {
            message: format!("Failed to build runtime: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    runtime.block_on(run_suite())
}

async fn run_suite() -> Result<bool, RunnerError> {
    try_load_dotenv();

    let log_dir = Path::new(LOG_DIRECTORY);
    std::fs::create_dir_all(log_dir).map_err(|e| RunnerError::Runner {
        message: format!("Failed to create log directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;
    logger_initialize(log_dir)?;

    let config = SuiteConfig::load(Path::new("."))?.with_env_overrides()?;
    info!("Targeting service at {}", config.service.base_url);

    let context = ScenarioContext::new(&config)?;
    let mut report = RunReport::new();

    for scenario in catalog() {
        info!("Running {}", scenario.name);

        let outcome = match scenario.execute(&context).await {
            Ok(()) => {
                info!("PASSED  {}", scenario.name);
                Outcome::Passed
            }
            Err(ScenarioError::Check { expectation, .. }) => {
                warn!("FAILED  {}: {expectation}", scenario.name);
                Outcome::Failed { expectation }
            }
            Err(aborted) => {
                error!("ERRORED {}: {aborted}", scenario.name);
                Outcome::Errored {
                    message: aborted.to_string(),
                }
            }
        };
        report.record(scenario.name, outcome);
    }

    info!("{report}");
    report.save(Path::new("."))?;

    Ok(report.all_passed())
}
