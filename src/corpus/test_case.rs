//! @ai:module:intent Labeled test cases and the corpus that owns them
//! @ai:module:layer domain
//! @ai:module:public_api TestCase, Corpus
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// @ai:intent A misspelling with every correction the corpus accepts for it
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub misspelling: String,
    /// Never empty once the case is part of a corpus
    pub answers: BTreeSet<String>,
}

impl TestCase {
    /// @ai:intent Create a case with a single accepted answer
    /// @ai:effects pure
    pub fn new(misspelling: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            misspelling: misspelling.into(),
            answers: BTreeSet::from([answer.into()]),
        }
    }

    /// @ai:intent Check whether a candidate is one of the accepted answers
    /// @ai:effects pure
    pub fn accepts(&self, candidate: &str) -> bool {
        self.answers.contains(candidate)
    }

    /// @ai:intent Accepted answers joined with commas, in sorted order
    /// @ai:effects pure
    pub fn answers_label(&self) -> String {
        self.answers
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// @ai:intent Immutable set of test cases keyed by misspelling
///
/// Keys iterate in ascending order so evaluation and reports are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    cases: BTreeMap<String, TestCase>,
}

impl Corpus {
    /// @ai:intent Build a corpus from (misspelling, answer) pairs, merging repeats
    /// @ai:pre both strings are already normalized
    /// @ai:effects pure
    pub fn from_pairs<I, M, A>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (M, A)>,
        M: Into<String>,
        A: Into<String>,
    {
        let mut corpus = Self::default();

        for (misspelling, answer) in pairs {
            corpus.insert(misspelling.into(), answer.into());
        }
        corpus
    }

    /// @ai:intent Add an answer, unioning with any existing case for the misspelling
    /// @ai:effects pure
    pub(crate) fn insert(&mut self, misspelling: String, answer: String) {
        match self.cases.get_mut(&misspelling) {
            Some(case) => {
                case.answers.insert(answer);
            }
            None => {
                let case = TestCase::new(misspelling.clone(), answer);
                self.cases.insert(misspelling, case);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn get(&self, misspelling: &str) -> Option<&TestCase> {
        self.cases.get(misspelling)
    }

    /// @ai:intent Iterate cases in ascending misspelling order
    /// @ai:effects pure
    pub fn iter(&self) -> impl Iterator<Item = &TestCase> {
        self.cases.values()
    }

    /// @ai:intent Misspellings in ascending order, ready to submit as one batch
    /// @ai:effects pure
    pub fn misspellings(&self) -> Vec<String> {
        self.cases.keys().cloned().collect()
    }
}
