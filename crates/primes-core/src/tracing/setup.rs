//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Filter used when `PRIMES_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "primes_core=info,primes_analysis=info,primes_cli=info";

/// Initialize the tracing/logging system.
///
/// Reads the `PRIMES_LOG` environment variable for per-crate log levels.
/// Format: `PRIMES_LOG=primes_analysis=debug,primes_cli=warn`
///
/// Logs go to stderr so that report output on stdout stays clean.
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("PRIMES_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
