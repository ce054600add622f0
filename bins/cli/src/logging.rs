//! Tracing subscriber setup.

use hrkit_shared::config::LoggingConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "hrkit=debug";

/// Picks the filter directive: `RUST_LOG` wins, then `--verbose`, then
/// the configured filter.
pub fn filter_directive(rust_log: Option<&str>, verbose: bool, config: &LoggingConfig) -> String {
    match rust_log.filter(|v| !v.trim().is_empty()) {
        Some(directive) => directive.to_string(),
        None if verbose => VERBOSE_FILTER.to_string(),
        None => config.filter.clone(),
    }
}

/// Installs the global subscriber. Output goes to stderr so stdout stays
/// machine-readable.
pub fn init(config: &LoggingConfig, verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(rust_log.as_deref(), verbose, config);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(VERBOSE_FILTER));

    let json = config.json.then(|| fmt::layer().json().with_writer(std::io::stderr));
    let plain = (!config.json).then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(plain)
        .init();
}
