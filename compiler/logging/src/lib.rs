#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Logging setup for the plugin.
//!
//! A protoc plugin owns standard output for its response, so every diagnostic goes to
//! standard error. The filter comes from the `ZAP_LOG` environment variable when set,
//! otherwise from the configured level.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "ZAP_LOG";

/// Level used before configuration has been read.
pub const DEFAULT_LEVEL: &str = "warn";

/// Check that `level` parses as a filter directive.
pub fn validate_level(level: &str) -> Result<(), ParseError> {
    EnvFilter::try_new(level).map(|_| ())
}

/// Install the global stderr subscriber.
///
/// Returns `false` if a subscriber was already installed (e.g. by a test harness), in which
/// case the existing one is kept.
pub fn init(level: &str) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .is_ok()
}

/// Emits a trace event tagged with the module it came from.
pub fn trace(module: &str, msg: &str) {
    tracing::trace!(module, "{}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_keeps_existing_subscriber() {
        let _ = init("debug");
        assert!(!init("info"));
        trace("logging", "still usable after a rejected init");
    }

    #[test]
    fn test_validate_level() {
        for level in ["warn", "debug", "zap_codegen=trace,info"] {
            assert!(validate_level(level).is_ok(), "{level} should parse");
        }
        assert!(validate_level("[bad").is_err());
    }
}
