use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the stderr subscriber. Call once, at startup. `RUST_LOG` overrides the default level,
/// which is `warn` or `info` with `--verbose`.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cabin_booking={default_level}")));

    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .init();
}
