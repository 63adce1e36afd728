//! Run accounting: per-scenario outcomes and the persisted report.

use crate::error::RunnerError;

use common::ErrorLocation;

use std::fmt;
use std::panic::Location;
use std::path::Path;

use serde::Serialize;

pub const REPORT_FILE_NAME: &str = "conformance-report.json";

/// How a single scenario ended.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", content = "detail")]
pub enum Outcome {
    /// Every expectation held.
    Passed,
    /// The service answered, but the answer broke the contract.
    Failed { expectation: String },
    /// The scenario could not observe the service and aborted.
    Errored { message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioRecord {
    pub name: String,
    pub outcome: Outcome,
}

/// Accumulated outcomes of one serial run.
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    records: Vec<ScenarioRecord>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: &str, outcome: Outcome) {
        self.records.push(ScenarioRecord {
            name: name.to_string(),
            outcome,
        });
    }

    pub fn records(&self) -> &[ScenarioRecord] {
        &self.records
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn passed(&self) -> usize {
        self.count(|outcome| matches!(outcome, Outcome::Passed))
    }

    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, Outcome::Failed { .. }))
    }

    pub fn errored(&self) -> usize {
        self.count(|outcome| matches!(outcome, Outcome::Errored { .. }))
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0 && self.errored() == 0
    }

    /// Persist to `{dir}/conformance-report.json` using atomic write
    /// (temp file + rename).
    pub fn save(&self, dir: &Path) -> Result<(), RunnerError> {
        let report_path = dir.join(REPORT_FILE_NAME);
        let temp_path = dir.join(format!("{REPORT_FILE_NAME}.tmp"));

        let json = serde_json::to_string_pretty(self).map_err(|e| RunnerError::Runner {
            message: format!("Failed to serialize report: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| RunnerError::Runner {
            message: format!("Failed to write report: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        std::fs::rename(&temp_path, &report_path).map_err(|e| RunnerError::Runner {
            message: format!("Failed to move report into place: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(())
    }

    fn count(&self, predicate: impl Fn(&Outcome) -> bool) -> usize {
        self.records
            .iter()
            .filter(|record| predicate(&record.outcome))
            .count()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} scenarios: {} passed, {} failed, {} errored",
            self.total(),
            self.passed(),
            self.failed(),
            self.errored()
        )
    }
}
