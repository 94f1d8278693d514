//! @ai:module:intent Evaluation of corrector predictions
//! @ai:module:layer application
//! @ai:module:public_api AccuracyEvaluator, Evaluation, Outcome, CaseResult

pub mod accuracy;
pub mod outcome;

pub use accuracy::{AccuracyEvaluator, AccuracyEvaluatorTrait, Evaluation};
pub use outcome::{CaseResult, Outcome};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CorrectorConfig;
    use crate::corpus::{Corpus, CorpusLoader, CorpusLoaderTrait};
    use crate::runner::{CorrectionClientTrait, MockCorrectionClient, ProcessCorrectionClient};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn corpus() -> Corpus {
        CorpusLoader::new()
            .load_from_reader("teh\tthe\nacn\tcan\nrecieve\treceive\nthier\ttheir\nthier\tthere\n".as_bytes())
            .unwrap()
    }

    #[tokio::test]
    async fn test_round_trip_with_mock_is_perfect() {
        let corpus = corpus();
        let answers: HashMap<String, Vec<String>> = corpus
            .iter()
            .map(|case| {
                let first = case.answers.iter().next().cloned().unwrap_or_default();
                (case.misspelling.clone(), vec![first])
            })
            .collect();

        let client = MockCorrectionClient::new(answers);
        let predictions = client.query(&corpus.misspellings(), 1).await.unwrap();
        let result = AccuracyEvaluator::new().evaluate(&corpus, &predictions).unwrap();

        assert_eq!(result.statistics.total, 4);
        assert!((result.statistics.accuracy - 1.0).abs() < f64::EPSILON);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_round_trip_with_stub_process_is_perfect() {
        let corpus = corpus();

        let arms: String = corpus
            .iter()
            .map(|case| {
                let first = case.answers.iter().next().cloned().unwrap_or_default();
                format!("{m}) echo \"{m}: {first}\";; ", m = case.misspelling)
            })
            .collect();
        let script = format!(r#"while IFS= read -r w; do case "$w" in {arms}esac; done"#);

        let client = ProcessCorrectionClient::new(CorrectorConfig {
            program: PathBuf::from("sh"),
            args: vec!["-c".to_string(), script, "corrector".to_string()],
            ..Default::default()
        });

        let predictions = client.query(&corpus.misspellings(), 1).await.unwrap();
        let result = AccuracyEvaluator::new().evaluate(&corpus, &predictions).unwrap();

        assert_eq!(result.statistics.correct, corpus.len());
        assert!((result.statistics.accuracy - 1.0).abs() < f64::EPSILON);
    }
}
