//! Logging setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Console logging on stderr so `--json` stdout stays parseable.
/// `RUST_LOG` overrides the default `warn` level.
pub fn init_cli_logging() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
