use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "adventure_core=info";

/// Installs a global `tracing` subscriber filtered by `RUST_LOG`.
///
/// Falls back to `adventure_core=info` when `RUST_LOG` is unset or invalid.
/// Safe to call more than once; only the first call installs anything, and an
/// already-installed subscriber from the host application is left alone.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        if fmt().with_env_filter(filter).try_init().is_ok() {
            tracing::info!("adventure-core tracing initialized");
        }
    });
}
