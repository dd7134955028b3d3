//! # Logging Setup
//!
//! Installs the global `tracing` subscriber. Development builds get
//! human-readable output; production emits bunyan-style JSON lines.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "beacon=info,tower_http=info";

/// Initializes the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing(production: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if production {
        let formatting_layer = BunyanFormattingLayer::new("beacon".into(), std::io::stdout);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(JsonStorageLayer)
            .with(formatting_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
