//! @ai:module:intent Plain-text report rendering
//! @ai:module:layer infrastructure
//! @ai:module:public_api TextReporter
//! @ai:module:stateless true

use crate::evaluator::{Evaluation, Outcome};
use std::fmt::Write as FmtWrite;
use std::time::Duration;

/// @ai:intent Trait for text report rendering
pub trait TextReporterTrait: Send + Sync {
    /// @ai:intent Render diagnostics and summary for a finished run
    fn render(&self, evaluation: &Evaluation, elapsed: Duration) -> String;
}

/// @ai:intent Renders an evaluation as operator-facing text
pub struct TextReporter;

impl TextReporter {
    /// @ai:intent Create a new text reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent One line per case that was not scored correct
    /// @ai:effects pure
    fn generate_diagnostics(evaluation: &Evaluation) -> String {
        let mut output = String::new();

        for result in evaluation.misses() {
            let label = match result.outcome {
                Outcome::Failed => "Failed",
                _ => "Wrong",
            };

            writeln!(
                output,
                "{} prediction for {}, prediction: {}, expected: {}",
                label,
                result.case.misspelling,
                result.prediction().unwrap_or("none"),
                result.case.answers_label()
            )
            .unwrap();
        }

        output
    }

    /// @ai:intent Summary block with counts and accuracy
    /// @ai:effects pure
    fn generate_summary(evaluation: &Evaluation, elapsed: Duration) -> String {
        let stats = &evaluation.statistics;
        let mut output = String::new();

        writeln!(
            output,
            "Tests finished in {:.6} minutes",
            elapsed.as_secs_f64() / 60.0
        )
        .unwrap();
        writeln!(output, "Total tests: {}", stats.total).unwrap();
        writeln!(output, "Total correct predictions: {}", stats.correct).unwrap();
        writeln!(output, "Total wrong predictions: {}", stats.wrong).unwrap();
        writeln!(
            output,
            "Total tests where no correction was found: {}",
            stats.failed
        )
        .unwrap();
        writeln!(output, "Accuracy: {:.6}", stats.accuracy).unwrap();

        output
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextReporterTrait for TextReporter {
    /// @ai:intent Diagnostics first, then the summary
    /// @ai:effects pure
    fn render(&self, evaluation: &Evaluation, elapsed: Duration) -> String {
        let mut output = Self::generate_diagnostics(evaluation);
        output.push_str(&Self::generate_summary(evaluation, elapsed));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::TestCase;
    use crate::evaluator::CaseResult;
    use crate::metrics::Statistics;
    use pretty_assertions::assert_eq;

    fn evaluation() -> Evaluation {
        let mut thier = TestCase::new("thier", "their");
        thier.answers.insert("there".to_string());

        Evaluation {
            statistics: Statistics {
                correct: 1,
                wrong: 1,
                failed: 1,
                total: 3,
                accuracy: 1.0 / 3.0,
            },
            cases: vec![
                CaseResult {
                    case: TestCase::new("acn", "can"),
                    outcome: Outcome::Failed,
                    candidates: vec![],
                },
                CaseResult {
                    case: TestCase::new("teh", "the"),
                    outcome: Outcome::Correct,
                    candidates: vec!["the".to_string()],
                },
                CaseResult {
                    case: thier,
                    outcome: Outcome::Wrong,
                    candidates: vec!["tier".to_string(), "thief".to_string()],
                },
            ],
        }
    }

    #[test]
    fn test_render_full_report() {
        let text = TextReporter::new().render(&evaluation(), Duration::from_secs(90));

        let expected = "\
Failed prediction for acn, prediction: none, expected: can
Wrong prediction for thier, prediction: tier, expected: their,there
Tests finished in 1.500000 minutes
Total tests: 3
Total correct predictions: 1
Total wrong predictions: 1
Total tests where no correction was found: 1
Accuracy: 0.333333
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_correct_cases_have_no_diagnostic() {
        let text = TextReporter::new().render(&evaluation(), Duration::ZERO);
        assert!(!text.contains("for teh"));
    }
}
