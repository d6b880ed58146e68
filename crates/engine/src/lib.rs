// crates/engine/src/lib.rs
use log::debug;
use rayon::prelude::*;
use std::fs::File;

pub mod aggregate;
pub mod chunk;
pub mod config;
pub mod error;
pub mod format;
pub mod merge;
pub mod sink;
pub mod split;

use crate::aggregate::AggregateTable;
use crate::chunk::ChunkReport;
use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::split::Span;

/// Outcome of a full run over one input file.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub table: AggregateTable,
    pub spans: Vec<Span>,
    pub file_size: u64,
    pub lines: u64,
    pub skipped: u64,
}

/// Run the aggregation pipeline over `config.input`.
///
/// The file is split into line-aligned spans, each span is aggregated on its own
/// worker, and the partial tables are merged once every worker has finished.
///
/// # Errors
///
/// Fails if the input cannot be opened, a boundary cannot be aligned, or any span
/// fails to read. A failed span aborts the run; no partial result is returned.
pub fn run(config: &Config) -> Result<RunSummary> {
    config.validate()?;

    let open_err = |source| EngineError::Open {
        path: config.input.clone(),
        source,
    };
    let mut file = File::open(&config.input).map_err(open_err)?;
    let file_size = file.metadata().map_err(open_err)?.len();

    let spans = split::split_file(&mut file, file_size, config.parallelism, config.lookback)?;
    drop(file);
    debug!(
        "{}: {file_size} bytes in {} span(s) on {} worker(s)",
        config.input.display(),
        spans.len(),
        config.parallelism
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.parallelism)
        .build()?;
    let reports = pool.install(|| {
        spans
            .par_iter()
            .map(|span| chunk::process_span(&config.input, *span, config.delimiter))
            .collect::<Result<Vec<ChunkReport>>>()
    })?;

    let mut lines = 0;
    let mut skipped = 0;
    let table = merge::merge_tables(reports.into_iter().map(|report| {
        lines += report.lines;
        skipped += report.skipped;
        report.table
    }));

    Ok(RunSummary {
        table,
        spans,
        file_size,
        lines,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_for(file: &NamedTempFile, parallelism: usize) -> Config {
        ConfigBuilder::default()
            .input(file.path())
            .parallelism(parallelism)
            .lookback(16usize)
            .build()
            .unwrap()
    }

    #[test]
    fn test_run_scenario() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "New York;10.5\nLos Angeles;20.3\nNew York;15.6\nLos Angeles;18.7\n").unwrap();

        let summary = run(&config_for(&file, 2)).unwrap();
        assert_eq!(summary.lines, 4);
        assert_eq!(summary.skipped, 0);
        assert_eq!(
            format::format_summary(&summary.table),
            "{Los Angeles=18.7/19.5/20.3, New York=10.5/13.1/15.6}"
        );
    }

    #[test]
    fn test_run_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let summary = run(&config_for(&file, 4)).unwrap();
        assert!(summary.spans.is_empty());
        assert_eq!(format::format_summary(&summary.table), "{}");
    }

    #[test]
    fn test_run_counts_skipped_lines() {
        let mut file = NamedTempFile::new().unwrap();
        for i in 0..100 {
            writeln!(file, "k{};{}.5", i % 3, i).unwrap();
            if i % 10 == 0 {
                writeln!(file, "garbage").unwrap();
            }
        }
        let summary = run(&config_for(&file, 4)).unwrap();
        assert!(summary.spans.len() > 1);
        assert_eq!(summary.skipped, 10);
        assert_eq!(summary.table.record_count(), 100);
    }

    #[test]
    fn test_run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigBuilder::default()
            .input(dir.path().join("absent.txt"))
            .build()
            .unwrap();
        assert!(matches!(run(&config), Err(EngineError::Open { .. })));
    }

    #[test]
    fn test_run_rejects_long_record_at_boundary() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{};1.0", "x".repeat(300)).unwrap();
        writeln!(file, "{};2.0", "y".repeat(100)).unwrap();
        let result = run(&config_for(&file, 2));
        assert!(matches!(result, Err(EngineError::Split { .. })));
    }
}
