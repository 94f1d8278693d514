//! @ai:module:intent Report generation for benchmark results
//! @ai:module:layer infrastructure
//! @ai:module:public_api ReportGenerator, TextReporter, JsonReporter, RunReport

pub mod json_report;
pub mod text_report;

pub use json_report::{JsonReporter, JsonReporterTrait, RunReport};
pub use text_report::{TextReporter, TextReporterTrait};

use crate::evaluator::Evaluation;
use anyhow::Result;
use std::path::Path;
use std::time::Duration;

/// @ai:intent Combined report generator
pub struct ReportGenerator {
    text: TextReporter,
    json: JsonReporter,
}

impl ReportGenerator {
    /// @ai:intent Create a new report generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            text: TextReporter::new(),
            json: JsonReporter::new(),
        }
    }

    /// @ai:intent Render the text report
    /// @ai:effects pure
    pub fn render_text(&self, evaluation: &Evaluation, elapsed: Duration) -> String {
        self.text.render(evaluation, elapsed)
    }

    /// @ai:intent Write the JSON report
    /// @ai:effects fs:write
    pub fn write_json(&self, report: &RunReport, output_path: &Path) -> Result<()> {
        self.json.generate(report, output_path)?;
        tracing::info!("JSON report written to {}", output_path.display());
        Ok(())
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
