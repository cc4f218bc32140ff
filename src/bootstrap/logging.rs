//! Tracing initialization for the shell.
//!
//! Level selection follows `RUST_LOG` when set, defaulting to `info`.
//! Safe to call more than once; later calls are no-ops.

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init();
}
