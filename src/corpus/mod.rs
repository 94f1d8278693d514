//! @ai:module:intent Labeled corpus definitions and loading
//! @ai:module:layer domain
//! @ai:module:public_api TestCase, Corpus, CorpusLoader

pub mod loader;
pub mod test_case;

pub use loader::{CorpusLoader, CorpusLoaderTrait};
pub use test_case::{Corpus, TestCase};
