use crate::error::{EngineError, Result};
use derive_builder::Builder;
use std::path::PathBuf;

/// Default bytes scanned backwards for a line terminator at each boundary.
pub const DEFAULT_LOOKBACK: usize = 128;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub input: PathBuf,
    #[builder(default = "num_cpus::get()")]
    pub parallelism: usize,
    #[builder(default = "b';'")]
    pub delimiter: u8,
    #[builder(default = "DEFAULT_LOOKBACK")]
    pub lookback: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            parallelism: num_cpus::get(),
            delimiter: b';',
            lookback: DEFAULT_LOOKBACK,
        }
    }
}

impl Config {
    /// Reject settings the pipeline cannot run with.
    ///
    /// # Errors
    /// Returns [`EngineError::Config`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.parallelism == 0 {
            return Err(EngineError::Config("parallelism must be at least 1".into()));
        }
        if self.lookback == 0 {
            return Err(EngineError::Config("lookback window must be at least 1 byte".into()));
        }
        if !self.delimiter.is_ascii() || matches!(self.delimiter, b'\n' | b'\r') {
            return Err(EngineError::Config(format!(
                "delimiter {:?} must be a single ASCII character other than a line break",
                char::from(self.delimiter)
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::default().input("m.txt").build().unwrap();
        assert_eq!(config.input, PathBuf::from("m.txt"));
        assert_eq!(config.delimiter, b';');
        assert_eq!(config.lookback, DEFAULT_LOOKBACK);
        assert!(config.parallelism >= 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_workers = Config {
            parallelism: 0,
            ..Config::default()
        };
        assert!(matches!(zero_workers.validate(), Err(EngineError::Config(_))));

        let zero_window = Config {
            lookback: 0,
            ..Config::default()
        };
        assert!(zero_window.validate().is_err());

        let newline = Config {
            delimiter: b'\n',
            ..Config::default()
        };
        assert!(newline.validate().is_err());

        let non_ascii = Config {
            delimiter: 0xC3,
            ..Config::default()
        };
        assert!(non_ascii.validate().is_err());
    }
}
