use log::LevelFilter;

/// Level implied by the number of `-v` flags.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Sends log records to stderr so they stay out of the game board.
/// `RUST_LOG`, when set, takes precedence over `verbosity`.
pub fn init(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None);
    // A second init (e.g. from tests) is harmless.
    let _ = builder.try_init();
}

/// `log::debug!` in debug builds. Release builds still type-check the
/// arguments but never emit the record.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            log::debug!($($arg)*);
        }
    };
}

/// `log::info!` in debug builds only.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            log::info!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(3), LevelFilter::Trace);
        assert_eq!(level_for(u8::MAX), LevelFilter::Trace);
    }

    #[test]
    fn test_macros_expand_in_statement_position() {
        let guess = 'q';
        crate::debug_log!("guess {guess:?}");
        crate::info_log!("{} misses", 3);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(0);
        init(2);
    }
}
