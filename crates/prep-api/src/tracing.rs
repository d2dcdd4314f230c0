//! Tracing and logging configuration.
//!
//! Development gets pretty, human-readable output; production gets JSON lines
//! for log aggregation. `RUST_LOG` overrides the default filter in both
//! (e.g. `RUST_LOG=debug,prep_api=trace`).

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Environment;

const DEVELOPMENT_FILTER: &str = "debug,tower_http=debug,sqlx=warn";
const PRODUCTION_FILTER: &str = "info,prep_api=info,tower_http=info,sqlx=warn";

/// Install the global subscriber for `env`.
///
/// Fails if a global subscriber is already set.
pub fn init_tracing(env: &Environment) -> anyhow::Result<()> {
    let default_filter = if env.is_development() {
        DEVELOPMENT_FILTER
    } else {
        PRODUCTION_FILTER
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry();
    if env.is_development() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .pretty()
                    .with_filter(env_filter),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .flatten_event(true)
                    .with_target(true)
                    .with_filter(env_filter),
            )
            .try_init()?;
    }

    tracing::info!(environment = ?env, "Tracing initialized");
    Ok(())
}
