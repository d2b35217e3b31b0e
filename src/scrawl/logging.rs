use crate::error::{Result, ScrawlError};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "scrawl=debug,tower_http=debug"
    } else {
        "scrawl=info,tower_http=info"
    }
}

/// Install the global subscriber: human-readable lines on stderr, `RUST_LOG` wins
/// over `--verbose`.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .try_init()
        .map_err(|e| ScrawlError::Config(format!("logging already initialized: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_both_targets() {
        assert_eq!(default_filter(false), "scrawl=info,tower_http=info");
        assert_eq!(default_filter(true), "scrawl=debug,tower_http=debug");
    }

    #[test]
    fn default_filters_parse() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_filter(verbose)).is_ok());
        }
    }
}
