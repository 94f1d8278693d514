//! @ai:module:intent Per-case judgement types
//! @ai:module:layer domain
//! @ai:module:public_api Outcome, CaseResult
//! @ai:module:stateless true

use crate::corpus::TestCase;
use serde::{Deserialize, Serialize};

/// @ai:intent Judgement for one test case
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// A candidate matched an accepted answer
    Correct,
    /// Candidates were returned but none matched
    Wrong,
    /// The corrector returned no candidates
    Failed,
}

impl Outcome {
    /// @ai:intent Convert outcome to string representation
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Correct => "correct",
            Outcome::Wrong => "wrong",
            Outcome::Failed => "failed",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @ai:intent A test case together with how the corrector did on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseResult {
    pub case: TestCase,
    pub outcome: Outcome,
    /// Candidates as returned, most confident first
    pub candidates: Vec<String>,
}

impl CaseResult {
    /// @ai:intent The candidate worth showing: the match if correct, otherwise the top one
    /// @ai:effects pure
    pub fn prediction(&self) -> Option<&str> {
        match self.outcome {
            Outcome::Correct => self
                .candidates
                .iter()
                .find(|c| self.case.accepts(c))
                .map(String::as_str),
            Outcome::Wrong | Outcome::Failed => self.candidates.first().map(String::as_str),
        }
    }
}
