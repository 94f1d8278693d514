//! @ai:module:intent JSON report generation
//! @ai:module:layer infrastructure
//! @ai:module:public_api JsonReporter, RunReport
//! @ai:module:stateless true

use crate::evaluator::{CaseResult, Evaluation};
use crate::metrics::Statistics;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// @ai:intent Machine-readable record of one benchmark run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub timestamp: String,
    pub input: PathBuf,
    pub count: u32,
    pub elapsed_secs: f64,
    pub statistics: Statistics,
    pub cases: Vec<CaseResult>,
}

impl RunReport {
    /// @ai:intent Snapshot an evaluation with run metadata
    /// @ai:effects clock
    pub fn new(input: &Path, count: u32, elapsed: Duration, evaluation: &Evaluation) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            input: input.to_path_buf(),
            count,
            elapsed_secs: elapsed.as_secs_f64(),
            statistics: evaluation.statistics,
            cases: evaluation.cases.clone(),
        }
    }
}

/// @ai:intent Trait for JSON report generation
pub trait JsonReporterTrait: Send + Sync {
    /// @ai:intent Write report as JSON to output_path
    fn generate(&self, report: &RunReport, output_path: &Path) -> Result<()>;
}

/// @ai:intent Writes run reports as pretty-printed JSON
pub struct JsonReporter;

impl JsonReporter {
    /// @ai:intent Create a new JSON reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReporterTrait for JsonReporter {
    /// @ai:intent Generate JSON report to file
    /// @ai:effects fs:write
    fn generate(&self, report: &RunReport, output_path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        std::fs::write(output_path, json)
            .with_context(|| format!("Failed to write report: {}", output_path.display()))?;
        Ok(())
    }
}
