//! Diagnostic logging for the CLI.
//!
//! The engine emits `tracing` events; this installs a stderr subscriber for
//! them, filtered through `RUST_LOG` (default `warn`).

use std::sync::OnceLock;

/// Initialize logging for the application. Later calls are no-ops.
pub fn init_logging() {
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(|| {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::fmt;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        // another subscriber may already be installed (e.g. by a test harness)
        let _ = fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
