//! @ai:module:intent CLI for the spelling corrector benchmark
//! @ai:module:layer presentation

use anyhow::Result;
use clap::Parser;
use spell_bench::{
    config::{DuplicatePolicy, HarnessConfig},
    corpus::{CorpusLoader, CorpusLoaderTrait},
    evaluator::{AccuracyEvaluator, AccuracyEvaluatorTrait},
    report::{ReportGenerator, RunReport},
    runner::{CorrectionClientTrait, ProcessCorrectionClient},
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "spell-bench")]
#[command(about = "Measure the accuracy of a spelling corrector against a labeled corpus")]
#[command(version)]
struct Cli {
    /// Path to the test data file (misspelling<TAB>correction per line)
    #[arg(short, long, required_unless_present = "write_config")]
    input: Option<PathBuf>,

    /// Number of suggestions to request per term
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Path to configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Corrector executable (overrides config)
    #[arg(long)]
    corrector: Option<PathBuf>,

    /// Seconds to wait for the corrector (overrides config)
    #[arg(long)]
    timeout: Option<u64>,

    /// Keep the last answer when the corrector repeats a term instead of failing
    #[arg(long)]
    permissive: bool,

    /// Also write a JSON report to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write the effective configuration to this path and exit
    #[arg(long)]
    write_config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("spell_bench=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    if let Some(path) = &cli.write_config {
        config.save(path)?;
        tracing::info!("Configuration written to {}", path.display());
        return Ok(());
    }

    let input = cli
        .input
        .ok_or_else(|| anyhow::anyhow!("--input is required"))?;

    run_benchmark(config, input, cli.count, cli.json).await
}

/// @ai:intent Merge config file and command-line overrides
/// @ai:effects fs:read
fn build_config(cli: &Cli) -> Result<HarnessConfig> {
    let mut config = match &cli.config {
        Some(path) => HarnessConfig::load(path)?,
        None => HarnessConfig::default(),
    };

    if let Some(program) = &cli.corrector {
        config.corrector.program = program.clone();
    }

    if let Some(timeout) = cli.timeout {
        config.corrector.timeout_secs = timeout;
    }

    if cli.permissive {
        config.corrector.duplicates = DuplicatePolicy::Permissive;
    }

    Ok(config)
}

/// @ai:intent Load corpus, query the corrector once, score and print
/// @ai:effects fs:read, process:spawn, fs:write
async fn run_benchmark(
    config: HarnessConfig,
    input: PathBuf,
    count: u32,
    json: Option<PathBuf>,
) -> Result<()> {
    let started = Instant::now();

    let corpus = CorpusLoader::new().load(&input)?;

    tracing::info!(
        "Querying {} with count={} (duplicates={})",
        config.corrector.program.display(),
        count,
        config.corrector.duplicates
    );

    let client = ProcessCorrectionClient::new(config.corrector);
    let predictions = client.query(&corpus.misspellings(), count).await?;

    let evaluation = AccuracyEvaluator::new().evaluate(&corpus, &predictions)?;
    let elapsed = started.elapsed();

    let reports = ReportGenerator::new();
    print!("{}", reports.render_text(&evaluation, elapsed));

    if let Some(path) = json {
        let report = RunReport::new(&input, count, elapsed, &evaluation);
        reports.write_json(&report, &path)?;
    }

    Ok(())
}
