//! @ai:module:intent Tab-separated corpus loader for benchmark test cases
//! @ai:module:layer infrastructure
//! @ai:module:public_api CorpusLoader
//! @ai:module:stateless true

use crate::corpus::test_case::Corpus;
use crate::error::{Error, Result};
use std::io::BufRead;
use std::path::Path;

/// @ai:intent Trait for loading a labeled corpus
pub trait CorpusLoaderTrait: Send + Sync {
    /// @ai:intent Load the corpus stored at path
    fn load(&self, path: &Path) -> Result<Corpus>;

    /// @ai:intent Load a corpus from any buffered reader
    fn load_from_reader<R: BufRead>(&self, reader: R) -> Result<Corpus>;
}

/// @ai:intent Loads `misspelling<TAB>correction` lines into a corpus
/// @ai:effects pure (stateless)
pub struct CorpusLoader;

impl CorpusLoader {
    /// @ai:intent Create a new corpus loader
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Split one raw line into its normalized fields
    /// @ai:pre the line terminator has been stripped and the line is not blank
    /// @ai:effects pure
    fn parse_line(line_number: usize, line: &str) -> Result<(String, String)> {
        let fields: Vec<&str> = line.split('\t').collect();

        if fields.len() != 2 {
            return Err(Error::Format {
                line: line_number,
                content: line.to_string(),
                reason: format!("expected 2 tab-separated fields, found {}", fields.len()),
            });
        }

        let misspelling = fields[0].trim().to_lowercase();
        let answer = fields[1].trim().to_lowercase();

        if misspelling.is_empty() || answer.is_empty() {
            return Err(Error::Format {
                line: line_number,
                content: line.to_string(),
                reason: "empty field".to_string(),
            });
        }

        if misspelling.chars().any(char::is_whitespace) {
            return Err(Error::Format {
                line: line_number,
                content: line.to_string(),
                reason: "misspelling must be a single word".to_string(),
            });
        }

        Ok((misspelling, answer))
    }
}

impl Default for CorpusLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusLoaderTrait for CorpusLoader {
    /// @ai:intent Load the corpus file at path
    /// @ai:post returned corpus is non-empty
    /// @ai:effects fs:read
    fn load(&self, path: &Path) -> Result<Corpus> {
        let file = std::fs::File::open(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let corpus = self.load_from_reader(std::io::BufReader::new(file))?;
        tracing::info!(
            "Loaded {} test cases from {}",
            corpus.len(),
            path.display()
        );
        Ok(corpus)
    }

    /// @ai:intent Parse every line, merging answers for repeated misspellings
    /// @ai:post returned corpus is non-empty
    /// @ai:effects io
    fn load_from_reader<R: BufRead>(&self, reader: R) -> Result<Corpus> {
        let mut corpus = Corpus::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.strip_suffix('\r').unwrap_or(&line);

            if line.trim().is_empty() {
                continue;
            }

            let (misspelling, answer) = Self::parse_line(index + 1, line)?;
            corpus.insert(misspelling, answer);
        }

        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        Ok(corpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;
    use std::io::Write;
    use tempfile::TempDir;

    fn load_str(content: &str) -> Result<Corpus> {
        CorpusLoader::new().load_from_reader(content.as_bytes())
    }

    #[test]
    fn test_load_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tests.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"teh\tthe\nacn\tcan\n").unwrap();

        let corpus = CorpusLoader::new().load(&path).unwrap();
        assert_eq!(corpus.misspellings(), vec!["acn", "teh"]);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let err = CorpusLoader::new()
            .load(&temp.path().join("absent.txt"))
            .unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }

    #[test]
    fn test_repeated_misspelling_merges() {
        let corpus = load_str("foo\tbar\nfoo\tbaz\n").unwrap();

        assert_eq!(corpus.len(), 1);
        assert_eq!(
            corpus.get("foo").unwrap().answers,
            BTreeSet::from(["bar".to_string(), "baz".to_string()])
        );
    }

    #[test]
    fn test_fields_are_lowercased() {
        let corpus = load_str("Teh\tThe\nTEH\tthe\n").unwrap();
        let case = corpus.get("teh").unwrap();
        assert_eq!(case.answers, BTreeSet::from(["the".to_string()]));
    }

    #[test]
    fn test_blank_lines_skipped_and_crlf_stripped() {
        let corpus = load_str("\nteh\tthe\r\n   \r\nacn\tcan").unwrap();
        assert_eq!(corpus.len(), 2);
        assert!(corpus.get("teh").unwrap().accepts("the"));
        assert!(corpus.get("acn").unwrap().accepts("can"));
    }

    #[test]
    fn test_single_field_is_format_error() {
        let err = load_str("teh\tthe\nbroken\n").unwrap_err();

        match err {
            Error::Format { line, content, .. } => {
                assert_eq!(line, 2);
                assert_eq!(content, "broken");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_three_fields_is_format_error() {
        let err = load_str("teh\tthe\tten\n").unwrap_err();
        assert!(matches!(err, Error::Format { line: 1, .. }));
    }

    #[test]
    fn test_empty_field_is_format_error() {
        let err = load_str("\tthe\n").unwrap_err();
        assert!(matches!(err, Error::Format { line: 1, .. }));
    }

    #[test]
    fn test_multi_word_misspelling_is_format_error() {
        let err = load_str("teh\tthe\na lot\tallot\n").unwrap_err();

        match err {
            Error::Format { line, content, .. } => {
                assert_eq!(line, 2);
                assert_eq!(content, "a lot\tallot");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_colon_in_misspelling_is_accepted() {
        let corpus = load_str("foo:bar\tfoobar\n").unwrap();
        assert!(corpus.get("foo:bar").unwrap().accepts("foobar"));
    }

    #[test]
    fn test_empty_input_is_empty_corpus() {
        assert!(matches!(load_str(""), Err(Error::EmptyCorpus)));
        assert!(matches!(load_str("\n\n  \n"), Err(Error::EmptyCorpus)));
    }
}
