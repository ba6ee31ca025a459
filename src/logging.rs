use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// Logs go to stderr; stdout carries protocol traffic. The filter comes from
/// `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
