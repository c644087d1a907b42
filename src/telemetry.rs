// Structured logging via tracing.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::errors::ServerError;

/// Install the global subscriber. `RUST_LOG` wins over the configured filter.
pub fn init(cfg: &LoggingConfig) -> Result<(), ServerError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.filter))
        .map_err(|e| ServerError::ConfigError(format!("invalid log filter: {e}")))?;

    let registry = tracing_subscriber::registry().with(filter);

    let result = if cfg.json {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_names(true))
            .try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    result.map_err(|e| ServerError::ConfigError(format!("logging already initialised: {e}")))
}

/// Span wrapping a single request.
#[inline]
pub fn request_span(method: &str, path: &str) -> tracing::Span {
    tracing::info_span!("request", method = method, path = path)
}
