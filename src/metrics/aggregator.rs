//! @ai:module:intent Outcome tallying for benchmark runs
//! @ai:module:layer application
//! @ai:module:public_api Tally
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::evaluator::Outcome;
use crate::metrics::types::Statistics;

/// @ai:intent Running counts threaded through evaluation by value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    correct: usize,
    wrong: usize,
    failed: usize,
}

impl Tally {
    /// @ai:intent Return a tally with one more outcome counted
    /// @ai:effects pure
    #[must_use]
    pub fn record(self, outcome: Outcome) -> Self {
        match outcome {
            Outcome::Correct => Self {
                correct: self.correct + 1,
                ..self
            },
            Outcome::Wrong => Self {
                wrong: self.wrong + 1,
                ..self
            },
            Outcome::Failed => Self {
                failed: self.failed + 1,
                ..self
            },
        }
    }

    pub fn total(&self) -> usize {
        self.correct + self.wrong + self.failed
    }

    /// @ai:intent Close the tally into statistics
    /// @ai:pre at least one outcome recorded
    /// @ai:effects pure
    pub fn finish(self) -> Result<Statistics> {
        let total = self.total();

        if total == 0 {
            return Err(Error::EmptyCorpus);
        }

        Ok(Statistics {
            correct: self.correct,
            wrong: self.wrong,
            failed: self.failed,
            total,
            accuracy: self.correct as f64 / total as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_each_outcome() {
        let tally = [
            Outcome::Correct,
            Outcome::Wrong,
            Outcome::Failed,
            Outcome::Correct,
        ]
        .into_iter()
        .fold(Tally::default(), Tally::record);

        let stats = tally.finish().unwrap();
        assert_eq!(stats.correct, 2);
        assert_eq!(stats.wrong, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.total, 4);
        assert!((stats.accuracy - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_failed_cases_stay_in_denominator() {
        let tally = Tally::default()
            .record(Outcome::Correct)
            .record(Outcome::Failed)
            .record(Outcome::Failed)
            .record(Outcome::Failed);

        let stats = tally.finish().unwrap();
        assert!((stats.accuracy - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_tally_is_error() {
        assert!(matches!(Tally::default().finish(), Err(Error::EmptyCorpus)));
    }
}
