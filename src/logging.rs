//! `tracing` subscriber setup for the binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Crate log level when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "nba_heights=debug"
    } else {
        "nba_heights=info"
    }
}

/// Log to stderr so stdout stays clean for results. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .init();
}
