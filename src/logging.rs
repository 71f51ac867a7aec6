use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Diagnostics go to stderr so that stdout only carries the answer.
///
/// Filter comes from `RUST_LOG`, defaulting to `warn`:
///
/// ```bash
/// RUST_LOG=toboggan=debug cargo run --release < input
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
