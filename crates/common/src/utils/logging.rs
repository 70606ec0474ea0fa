use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Compact human-readable logs on stderr.
///
/// `RUST_LOG` wins when set; otherwise `info` with `reqwest` held at `warn`.
pub fn init_logging_default() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}

/// One JSON object per event on stderr.
///
/// `RUST_LOG` wins when set; otherwise `info,service=debug`, which also
/// shows the store's create/update/remove events.
pub fn init_logging_json() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,service=debug"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .json()
        .with_writer(io::stderr)
        .try_init();
}
