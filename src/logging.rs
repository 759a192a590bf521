use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter for `default_level`, falling back to `info` when it does not parse.
pub fn level_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_new(default_level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize tracing, writing to stderr so stdout carries only demo output.
///
/// `RUST_LOG` wins over `default_level`. Returns `false` when a global
/// subscriber was already installed; the existing one is kept.
pub fn init_tracing(default_level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_second_init_is_noop() {
        init_tracing("debug");
        assert!(!init_tracing("info"));
    }

    #[test]
    fn test_valid_level_is_used() {
        assert_eq!(level_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(level_filter("warn").max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_bad_level_falls_back_to_info() {
        assert_eq!(level_filter("demo=loud").max_level_hint(), Some(LevelFilter::INFO));
    }
}
