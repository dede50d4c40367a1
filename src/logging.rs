//! Tracing subscriber setup for the command-line driver.
//!
//! The library only emits events; installing a subscriber is left to
//! binaries and tests.

use tracing::info;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Environment variable that switches log output to JSON.
pub const LOG_JSON_ENV: &str = "CPU_SIM_LOG_JSON";

/// Initializes structured logging on stderr.
///
/// Environment variables:
/// - RUST_LOG: log filter (default: info)
/// - CPU_SIM_LOG_JSON: `1` or `true` for JSON lines
///
/// Calling it twice is harmless; the second call keeps the first subscriber.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let use_json = json_requested(std::env::var(LOG_JSON_ENV).ok().as_deref());
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .try_init()
    };

    if result.is_ok() {
        info!(json = use_json, "tracing initialized");
    }
}

fn json_requested(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some("1") | Some("true") | Some("TRUE"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_requested() {
        assert!(json_requested(Some("1")));
        assert!(json_requested(Some(" true ")));
        assert!(!json_requested(Some("0")));
        assert!(!json_requested(None));
    }
}
