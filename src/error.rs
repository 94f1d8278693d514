//! @ai:module:intent Error types for the spelling benchmark harness
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// @ai:intent Every condition that aborts a benchmark run
///
/// Wrong or failed predictions are benchmark outcomes, not errors, and never
/// appear here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read corpus file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed corpus line {line}: {reason} (content: {content:?})")]
    Format {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("Corpus contains no test cases")]
    EmptyCorpus,

    #[error("Candidate count must be positive, got {0}")]
    InvalidCount(u32),

    #[error("Failed to spawn corrector {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrector exited with {}: {stderr}", exit_label(.code))]
    Execution { code: Option<i32>, stderr: String },

    #[error("Corrector did not finish within {}s", .timeout.as_secs_f64())]
    Timeout { timeout: Duration },

    #[error("Malformed corrector output line {line}: {reason} (content: {content:?})")]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("Corrector answered term {term:?} more than once")]
    DuplicateResponse { term: String },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_message_includes_stderr() {
        let err = Error::Execution {
            code: Some(2),
            stderr: "dictionary missing".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Corrector exited with status 2: dictionary missing"
        );
    }

    #[test]
    fn test_format_message_names_line() {
        let err = Error::Format {
            line: 7,
            content: "teh".to_string(),
            reason: "expected 2 tab-separated fields, found 1".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("line 7"));
        assert!(message.contains("\"teh\""));
    }
}
