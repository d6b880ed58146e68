// crates/cli/src/logging.rs
use env_logger::Env;
use log::LevelFilter;

/// Map `-v`/`-q` counts to a level; `warn` when neither is given.
#[must_use]
pub const fn level_for(verbose: u8, quiet: u8) -> LevelFilter {
    match (verbose, quiet) {
        (0, 0) => LevelFilter::Warn,
        (0, 1) => LevelFilter::Error,
        (0, _) => LevelFilter::Off,
        (1, _) => LevelFilter::Info,
        (2, _) => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. `RUST_LOG` wins when no flag was given.
pub fn init(verbose: u8, quiet: u8) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format_timestamp_millis();
    if verbose > 0 || quiet > 0 {
        builder.filter_level(level_for(verbose, quiet));
    }
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0, 0), LevelFilter::Warn);
        assert_eq!(level_for(0, 1), LevelFilter::Error);
        assert_eq!(level_for(0, 3), LevelFilter::Off);
        assert_eq!(level_for(1, 0), LevelFilter::Info);
        assert_eq!(level_for(2, 0), LevelFilter::Debug);
        assert_eq!(level_for(5, 0), LevelFilter::Trace);
    }
}
