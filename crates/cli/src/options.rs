use clap::ValueEnum;

/// How the summary is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{key=min/mean/max, ...}` on one line
    #[default]
    Text,
    /// JSON array of per-key rows
    Json,
}
