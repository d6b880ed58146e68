// crates/cli/src/presentation.rs
use crate::config::RunConfig;
use crate::error::Result;
use crate::options::OutputFormat;
use station_stats_engine::RunSummary;
use station_stats_engine::format::{format_json, format_summary};
use station_stats_engine::sink;
use std::time::Duration;

/// Render the merged table in the configured format.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render(summary: &RunSummary, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => format_summary(&summary.table),
        OutputFormat::Json => format_json(&summary.table)?,
    })
}

/// Render and write the summary to the configured sink.
///
/// # Errors
/// Returns an error if rendering fails or the sink cannot be written.
pub fn emit(summary: &RunSummary, config: &RunConfig) -> Result<()> {
    let text = render(summary, config.format)?;
    sink::write_summary(config.output.as_deref(), &text)?;
    Ok(())
}

/// `MM:SS.mmm`
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_ms = elapsed.as_millis();
    let minutes = total_ms / 60_000;
    let seconds = (total_ms / 1000) % 60;
    let millis = total_ms % 1000;
    format!("{minutes:02}:{seconds:02}.{millis:03}")
}

pub fn print_timing(elapsed: Duration) {
    eprintln!(
        "Time taken to read and process the file: {}",
        format_elapsed(elapsed)
    );
}
