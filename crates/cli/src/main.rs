use clap::Parser;
use log::{info, warn};
use station_stats_cli::args::Args;
use station_stats_cli::config::RunConfig;
use station_stats_cli::error::Result;
use station_stats_cli::{logging, presentation};
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.behavior.verbose, args.behavior.quiet);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let start = Instant::now();
    let config = RunConfig::try_from(args)?;

    let summary = station_stats_engine::run(&config.engine)?;
    if summary.skipped > 0 {
        warn!(
            "skipped {} malformed line(s) out of {}",
            summary.skipped, summary.lines
        );
    }

    presentation::emit(&summary, &config)?;

    let elapsed = start.elapsed();
    info!(
        "station_stats v{}: {} keys from {} lines in {elapsed:?}",
        station_stats_cli::VERSION,
        summary.table.len(),
        summary.lines
    );
    if config.timing {
        presentation::print_timing(elapsed);
    }
    Ok(())
}
