use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Initializes a tracing Subscriber for logging.
///
/// `RUST_LOG` takes precedence over `default_level`. Logs go to stderr so they never mix with
/// command output.
pub fn subscriber(default_level: LevelFilter) {
    let filter = EnvFilter::builder().with_default_directive(default_level.into()).from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
