//! @ai:module:intent Parse corrector output into ranked predictions
//! @ai:module:layer domain
//! @ai:module:public_api PredictionResult, ResponseLine, parse_line, decode_output
//! @ai:module:stateless true

use crate::config::DuplicatePolicy;
use crate::error::{Error, Result};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

/// @ai:intent One parsed `term: c1,c2,...` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseLine {
    pub term: String,
    pub candidates: Vec<String>,
}

/// @ai:intent Ranked candidates per misspelling, most confident first
///
/// Every requested term has an entry; an empty list means no suggestion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionResult {
    predictions: HashMap<String, Vec<String>>,
}

impl PredictionResult {
    /// @ai:intent Build a result directly from a term to candidates map
    /// @ai:effects pure
    pub fn from_map(predictions: HashMap<String, Vec<String>>) -> Self {
        Self { predictions }
    }

    /// @ai:intent Parse a complete corrector stdout for a batch of requested terms
    /// @ai:pre count >= 1
    /// @ai:post every requested term is present, possibly with no candidates
    /// @ai:effects pure
    pub fn from_output(
        requested: &[String],
        output: &str,
        count: u32,
        duplicates: DuplicatePolicy,
    ) -> Result<Self> {
        let wanted: HashSet<&str> = requested.iter().map(String::as_str).collect();
        let mut predictions: HashMap<String, Vec<String>> = HashMap::with_capacity(requested.len());

        for (index, raw) in output.lines().enumerate() {
            let raw = raw.strip_suffix('\r').unwrap_or(raw);

            if raw.trim().is_empty() {
                continue;
            }

            let line = parse_line(index + 1, raw, count)?;

            if !wanted.contains(line.term.as_str()) {
                tracing::warn!("Corrector answered unrequested term {:?}", line.term);
            }

            match predictions.entry(line.term) {
                Entry::Vacant(slot) => {
                    slot.insert(line.candidates);
                }
                Entry::Occupied(mut slot) => match duplicates {
                    DuplicatePolicy::Strict => {
                        return Err(Error::DuplicateResponse {
                            term: slot.key().clone(),
                        });
                    }
                    DuplicatePolicy::Permissive => {
                        tracing::warn!(
                            "Corrector answered {:?} again; keeping the later answer",
                            slot.key()
                        );
                        slot.insert(line.candidates);
                    }
                },
            }
        }

        for term in requested {
            predictions.entry(term.clone()).or_default();
        }

        Ok(Self { predictions })
    }

    /// @ai:intent Candidates for a term, or None if the term was never seen
    /// @ai:effects pure
    pub fn get(&self, term: &str) -> Option<&[String]> {
        self.predictions.get(term).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// @ai:intent Number of terms that received at least one candidate
    /// @ai:effects pure
    pub fn answered(&self) -> usize {
        self.predictions.values().filter(|c| !c.is_empty()).count()
    }
}

/// @ai:intent Decode raw corrector stdout, rejecting invalid UTF-8
/// @ai:effects pure
pub fn decode_output(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        let bytes = e.as_bytes();
        let valid = e.utf8_error().valid_up_to();
        let start = bytes[..valid]
            .iter()
            .rposition(|b| *b == b'\n')
            .map_or(0, |i| i + 1);
        let end = bytes[valid..]
            .iter()
            .position(|b| *b == b'\n')
            .map_or(bytes.len(), |i| valid + i);

        Error::Parse {
            line: bytes[..start].iter().filter(|b| **b == b'\n').count() + 1,
            content: String::from_utf8_lossy(&bytes[start..end]).into_owned(),
            reason: "invalid UTF-8".to_string(),
        }
    })
}

/// @ai:intent Parse a single non-blank response line
/// @ai:pre line has no terminator
/// @ai:effects pure
pub fn parse_line(line_number: usize, line: &str, count: u32) -> Result<ResponseLine> {
    let fail = |reason: String| Error::Parse {
        line: line_number,
        content: line.to_string(),
        reason,
    };

    let tokens: Vec<&str> = line.split_whitespace().collect();

    let (first, last) = match tokens.as_slice() {
        [first, .., last] => (*first, *last),
        _ => return Err(fail("expected `term: candidates`".to_string())),
    };

    let term = match first.strip_suffix(':') {
        Some(term) if !term.is_empty() => term.to_lowercase(),
        _ => return Err(fail("term must be followed directly by a colon".to_string())),
    };

    let candidates: Vec<String> = last.split(',').map(str::to_lowercase).collect();

    if candidates.iter().any(String::is_empty) {
        return Err(fail("empty candidate in list".to_string()));
    }

    if candidates.len() > count as usize {
        return Err(fail(format!(
            "{} candidates exceed requested count {}",
            candidates.len(),
            count
        )));
    }

    Ok(ResponseLine { term, candidates })
}
