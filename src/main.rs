use std::{process::exit, time::Instant};

use bayesian_golf::{
    args::Args,
    config::ScoringConfig,
    data::{error::DataError, loader::load_submissions, writer::write_report},
    model::{error::ScoringError, leaderboard::ScoringModel},
    utils::logging::init_logging
};
use clap::Parser;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Scoring(#[from] ScoringError)
}

fn main() {
    dotenv::dotenv().ok();
    let args = Args::parse();

    init_logging(&args.log_level);

    if let Err(e) = run(&args) {
        error!("{}", e);
        exit(1);
    }
}

fn run(args: &Args) -> Result<(), RunError> {
    let config = ScoringConfig::from(args);

    let start = Instant::now();
    let submissions = load_submissions(&args.input)?;
    info!(
        "Loaded {} solutions from {} in {:.2?}",
        submissions.len(),
        args.input.display(),
        start.elapsed()
    );

    let model = ScoringModel::new(&submissions, config)?;
    let aggregates = model.aggregates();
    info!(
        "{} puzzles, {} users, {} languages, {} unique solutions",
        aggregates.puzzle_count(),
        aggregates.user_count(),
        aggregates.language_count(),
        aggregates.submissions().len()
    );

    let baseline = model.baseline();
    let report = model.process(&baseline)?;

    write_report(&args.output, &report)?;
    info!("Wrote {}", args.output.display());

    Ok(())
}
