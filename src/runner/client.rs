//! @ai:module:intent Correction client seam and in-memory test double
//! @ai:module:layer infrastructure
//! @ai:module:public_api CorrectionClientTrait, MockCorrectionClient
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::runner::response::PredictionResult;
use std::collections::HashMap;

/// @ai:intent Trait for anything that can answer a batch of misspellings
#[allow(async_fn_in_trait)]
pub trait CorrectionClientTrait: Send + Sync {
    /// @ai:intent Submit every misspelling in one batch and collect ranked candidates
    /// @ai:pre misspellings are unique; count >= 1
    /// @ai:post every requested misspelling has an entry in the result
    async fn query(&self, misspellings: &[String], count: u32) -> Result<PredictionResult>;
}

/// @ai:intent Mock client that answers from a fixed table
pub struct MockCorrectionClient {
    answers: HashMap<String, Vec<String>>,
}

impl MockCorrectionClient {
    /// @ai:intent Create a mock client from a term to candidates table
    /// @ai:effects pure
    pub fn new(answers: HashMap<String, Vec<String>>) -> Self {
        Self { answers }
    }
}

impl CorrectionClientTrait for MockCorrectionClient {
    /// @ai:intent Return table entries truncated to count
    /// @ai:effects pure
    async fn query(&self, misspellings: &[String], count: u32) -> Result<PredictionResult> {
        if count == 0 {
            return Err(Error::InvalidCount(count));
        }

        let predictions = misspellings
            .iter()
            .map(|term| {
                let candidates: Vec<String> = self
                    .answers
                    .get(term)
                    .map(|c| c.iter().take(count as usize).cloned().collect())
                    .unwrap_or_default();
                (term.clone(), candidates)
            })
            .collect();

        Ok(PredictionResult::from_map(predictions))
    }
}
