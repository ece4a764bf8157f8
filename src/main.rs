//! Examr command-line entrypoint.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mimalloc::MiMalloc;
use tracing_subscriber::EnvFilter;

use examr::config::Config;
use examr::review::ReviewPipeline;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[command(name = "examr")]
#[command(version)]
#[command(about = "Flag near-duplicate exam responses and summarise them per student")]
struct Cli {
    /// Current-period responses CSV
    #[arg(short = 'r', long = "rfile", value_name = "FILE")]
    responses: PathBuf,

    /// Analysis report to write
    #[arg(short = 'a', long = "afile", value_name = "FILE")]
    analysis: PathBuf,

    /// Historical responses CSV (repeatable)
    #[arg(short = 'o', long = "ofile", value_name = "FILE")]
    historical: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    if config.uses_stub_encoder() {
        tracing::warn!("No EXAMR_MODEL_PATH configured, running encoder in stub mode");
    }

    let pipeline = ReviewPipeline::from_config(&config).context("failed to prepare encoder")?;

    tracing::info!(
        responses = %cli.responses.display(),
        historical = cli.historical.len(),
        analysis = %cli.analysis.display(),
        "Examr starting"
    );

    let outcome = pipeline
        .process_files(&cli.responses, &cli.historical, &cli.analysis)
        .with_context(|| format!("review of {} failed", cli.responses.display()))?;

    for alert in outcome.alerts() {
        println!("{alert}");
    }

    tracing::info!(
        students = outcome.summary.students,
        alerts = outcome.alert_count(),
        "Review complete"
    );

    Ok(())
}
