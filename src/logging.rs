//! Tracing setup: the browser console on wasm, stderr everywhere else.

use crate::config::LogLevel;
use once_cell::sync::OnceCell;

static TRACING: OnceCell<()> = OnceCell::new();

/// Install the global subscriber once; later calls are ignored.
pub fn init_tracing(level: LogLevel) {
    TRACING.get_or_init(|| install(level));
}

#[cfg(target_arch = "wasm32")]
fn install(level: LogLevel) {
    let mut builder = tracing_wasm::WASMLayerConfigBuilder::new();
    builder.set_max_level(level.as_tracing_level());
    tracing_wasm::set_as_global_default_with_config(builder.build());
    tracing::info!(%level, "Logging initialized");
}

#[cfg(not(target_arch = "wasm32"))]
fn install(level: LogLevel) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // RUST_LOG wins over the configured level.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));
    let installed = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(env_filter),
        )
        .try_init();
    match installed {
        Ok(()) => tracing::info!(%level, "Logging initialized; override with RUST_LOG"),
        Err(err) => tracing::warn!("Another subscriber is already installed: {err}"),
    }
}
