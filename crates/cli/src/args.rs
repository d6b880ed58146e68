// crates/cli/src/args.rs
use crate::options::OutputFormat;
use crate::parsers::{self, SizeArg};
use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "station_stats",
    version,
    about = "Per-key min/mean/max of a large `key;value` measurement file"
)]
pub struct Args {
    /// Measurement file, one `key<delimiter>value` record per line
    #[arg(value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub input: PathBuf,

    #[command(flatten)]
    pub scan: ScanOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,
}

#[derive(ClapArgs, Debug)]
pub struct ScanOptions {
    /// Number of worker threads (and at most as many spans); defaults to the CPU count
    #[arg(short = 'j', long = "threads", value_parser = parsers::parse_positive_usize, help_heading = "Scan")]
    pub jobs: Option<usize>,

    /// Field delimiter, a single ASCII character
    #[arg(short, long, default_value = ";", value_parser = parsers::parse_delimiter, help_heading = "Scan")]
    pub delimiter: u8,

    /// Bytes scanned backwards for a line break at each span boundary (e.g. 128, 4K)
    #[arg(long, default_value = "128", help_heading = "Scan")]
    pub lookback: SizeArg,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: OutputFormat,

    /// Write the summary to a file instead of stdout
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// Print elapsed wall-clock time to stderr
    #[arg(long, help_heading = "Output")]
    pub timing: bool,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// More log output (repeatable)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Behavior")]
    pub verbose: u8,

    /// Less log output (repeatable)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "verbose", help_heading = "Behavior")]
    pub quiet: u8,
}
