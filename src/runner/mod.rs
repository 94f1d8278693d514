//! @ai:module:intent Corrector invocation and response parsing
//! @ai:module:layer infrastructure
//! @ai:module:public_api CorrectionClientTrait, ProcessCorrectionClient, MockCorrectionClient, PredictionResult

pub mod client;
pub mod process_client;
pub mod response;

pub use client::{CorrectionClientTrait, MockCorrectionClient};
pub use process_client::ProcessCorrectionClient;
pub use response::{decode_output, parse_line, PredictionResult, ResponseLine};
