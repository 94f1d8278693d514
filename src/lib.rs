//! @ai:module:intent Accuracy benchmark harness for an external spelling corrector
//! @ai:module:layer application
//! @ai:module:public_api config, corpus, runner, evaluator, metrics, report, error

pub mod config;
pub mod corpus;
pub mod error;
pub mod evaluator;
pub mod metrics;
pub mod report;
pub mod runner;

pub use config::{CorrectorConfig, DuplicatePolicy, HarnessConfig};
pub use corpus::{Corpus, CorpusLoader, TestCase};
pub use error::{Error, Result};
pub use evaluator::{AccuracyEvaluator, CaseResult, Evaluation, Outcome};
pub use metrics::{Statistics, Tally};
pub use report::{ReportGenerator, RunReport};
pub use runner::{
    CorrectionClientTrait, MockCorrectionClient, PredictionResult, ProcessCorrectionClient,
};
