//! @ai:module:intent Score predictions against the labeled corpus
//! @ai:module:layer application
//! @ai:module:public_api AccuracyEvaluator, AccuracyEvaluatorTrait, Evaluation
//! @ai:module:stateless true

use crate::corpus::{Corpus, TestCase};
use crate::error::Result;
use crate::evaluator::outcome::{CaseResult, Outcome};
use crate::metrics::{Statistics, Tally};
use crate::runner::PredictionResult;
use serde::{Deserialize, Serialize};

/// @ai:intent Statistics plus every case's outcome, in ascending misspelling order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub statistics: Statistics,
    pub cases: Vec<CaseResult>,
}

impl Evaluation {
    /// @ai:intent Cases that were not scored correct
    /// @ai:effects pure
    pub fn misses(&self) -> impl Iterator<Item = &CaseResult> {
        self.cases.iter().filter(|c| c.outcome != Outcome::Correct)
    }
}

/// @ai:intent Trait for accuracy evaluation
pub trait AccuracyEvaluatorTrait: Send + Sync {
    /// @ai:intent Judge every corpus case against the predictions
    fn evaluate(&self, corpus: &Corpus, predictions: &PredictionResult) -> Result<Evaluation>;
}

/// @ai:intent First-match accuracy evaluator
pub struct AccuracyEvaluator;

impl AccuracyEvaluator {
    /// @ai:intent Create a new evaluator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Judge one case; the earliest-ranked accepted candidate wins
    /// @ai:effects pure
    pub fn judge(case: &TestCase, candidates: &[String]) -> Outcome {
        if candidates.is_empty() {
            Outcome::Failed
        } else if candidates.iter().any(|c| case.accepts(c)) {
            Outcome::Correct
        } else {
            Outcome::Wrong
        }
    }
}

impl Default for AccuracyEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl AccuracyEvaluatorTrait for AccuracyEvaluator {
    /// @ai:intent Judge every corpus case and tally the outcomes
    /// @ai:post statistics.correct + wrong + failed == corpus.len()
    /// @ai:effects pure
    fn evaluate(&self, corpus: &Corpus, predictions: &PredictionResult) -> Result<Evaluation> {
        let mut cases = Vec::with_capacity(corpus.len());

        let tally = corpus.iter().fold(Tally::default(), |tally, case| {
            let candidates = predictions.get(&case.misspelling).unwrap_or_default();
            let outcome = Self::judge(case, candidates);

            match outcome {
                Outcome::Failed => {
                    tracing::debug!("No prediction for {}", case.misspelling);
                }
                Outcome::Wrong => {
                    tracing::debug!(
                        "Wrong prediction for {}: {} (expected {})",
                        case.misspelling,
                        candidates[0],
                        case.answers_label()
                    );
                }
                Outcome::Correct => {}
            }

            cases.push(CaseResult {
                case: case.clone(),
                outcome,
                candidates: candidates.to_vec(),
            });
            tally.record(outcome)
        });

        let statistics = tally.finish()?;

        tracing::info!(
            "Scored {} cases: {} correct, {} wrong, {} failed (accuracy {:.4})",
            statistics.total,
            statistics.correct,
            statistics.wrong,
            statistics.failed,
            statistics.accuracy
        );

        Ok(Evaluation { statistics, cases })
    }
}
