use tracing_subscriber::EnvFilter;

/// `SHELFWISE_LOG` wins over `--log-level`. Logs go to stderr so stdout stays clean for `--json`.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_env("SHELFWISE_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
