//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults::DEFAULT_LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the Recoup tracing/logging system.
///
/// Reads the `RECOUP_LOG` environment variable for per-crate log levels,
/// e.g. `RECOUP_LOG=recoup_allocator=debug,recoup_report=warn`.
/// Falls back to `fallback_level` applied to every Recoup crate.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(fallback_level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(DEFAULT_LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(fallback_directives(fallback_level)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}

/// Directive string applying `level` to each workspace crate.
pub fn fallback_directives(level: &str) -> String {
    [
        "recoup_core",
        "recoup_allocator",
        "recoup_session",
        "recoup_report",
        "recoup_cli",
        "recoup",
    ]
    .iter()
    .map(|target| format!("{target}={level}"))
    .collect::<Vec<_>>()
    .join(",")
}
