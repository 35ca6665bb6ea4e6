//! src/report.rs
//!
//! The JSON summary of one script run.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Passed,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub script: String,
    pub status: RunStatus,
    pub steps_total: usize,
    pub steps_completed: usize,
    pub error: Option<String>,
    pub started_at_ms: u64,
    pub duration_ms: u64,
}

impl RunReport {
    pub fn passed(&self) -> bool {
        self.status == RunStatus::Passed
    }

    pub(crate) fn from_outcome(
        script: &str,
        steps_total: usize,
        steps_completed: usize,
        outcome: &Result<()>,
        started_at_ms: u64,
        duration_ms: u64,
    ) -> Self {
        let (status, error) = match outcome {
            Ok(()) => (RunStatus::Passed, None),
            Err(e) => (RunStatus::Failed, Some(e.to_string())),
        };
        Self {
            script: script.to_string(),
            status,
            steps_total,
            steps_completed,
            error,
            started_at_ms,
            duration_ms,
        }
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(Error::from)
    }
}
