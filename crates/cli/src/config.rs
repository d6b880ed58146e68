// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
use crate::options::OutputFormat;
pub use station_stats_engine::config::{Config, ConfigBuilder};
use std::path::PathBuf;

/// Everything the binary needs for one run: the engine config plus presentation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub engine: Config,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub timing: bool,
}

impl TryFrom<Args> for RunConfig {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self> {
        let parallelism = args.scan.jobs.unwrap_or_else(num_cpus::get);
        let lookback = usize::try_from(args.scan.lookback.0)
            .map_err(|_| AppError::Config(format!("lookback {} is too large", args.scan.lookback.0)))?;

        let engine = ConfigBuilder::default()
            .input(args.input)
            .parallelism(parallelism)
            .delimiter(args.scan.delimiter)
            .lookback(lookback)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;
        engine.validate()?;

        Ok(Self {
            engine,
            format: args.output.format,
            output: args.output.output,
            timing: args.output.timing,
        })
    }
}
