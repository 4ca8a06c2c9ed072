//! Tracing subscriber setup driven by the logging configuration

use crate::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Calling this more
/// than once panics (the subscriber can only be installed once per process),
/// so the presentation layer should call it exactly once at startup.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("{},reqwest=warn,hyper=warn", config.level))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WattcastConfig;

    #[test]
    fn test_init_tracing_with_default_config() {
        // The global subscriber can only be installed once per process, so
        // this is the only test that calls init_tracing
        let config = WattcastConfig::default();
        init_tracing(&config.logging);
        tracing::info!("telemetry initialized");
    }
}
