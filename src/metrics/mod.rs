//! @ai:module:intent Metrics collection and aggregation
//! @ai:module:layer application
//! @ai:module:public_api Statistics, Tally

pub mod aggregator;
pub mod types;

pub use aggregator::Tally;
pub use types::Statistics;
