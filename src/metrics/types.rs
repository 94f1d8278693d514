//! @ai:module:intent Metric types for benchmark results
//! @ai:module:layer domain
//! @ai:module:public_api Statistics
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};

/// @ai:intent Aggregate counts for one run plus the derived accuracy
///
/// `accuracy` is `correct / total`, where `total` includes failed cases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub correct: usize,
    pub wrong: usize,
    pub failed: usize,
    pub total: usize,
    pub accuracy: f64,
}

impl Statistics {
    /// @ai:intent Cases that received at least one candidate
    /// @ai:effects pure
    pub fn attempted(&self) -> usize {
        self.correct + self.wrong
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempted_excludes_failed() {
        let stats = Statistics {
            correct: 3,
            wrong: 2,
            failed: 5,
            total: 10,
            accuracy: 0.3,
        };
        assert_eq!(stats.attempted(), 5);
    }
}
