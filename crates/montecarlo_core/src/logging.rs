//! Logging setup for applications embedding the simulator
//!
//! The library itself only emits `tracing` events; callers that have no
//! subscriber of their own can install a stderr one with [`init_logging`].

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the filter used by [`init_logging`].
///
/// `RUST_LOG` takes precedence; otherwise this crate logs at `level`.
#[must_use]
pub fn env_filter(level: &str) -> EnvFilter {
    let default_filter = format!("montecarlo_core={level}");
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Install a global subscriber that writes simulator logs to stderr.
///
/// The level can be controlled via the `level` parameter (trace, debug, info,
/// warn, error) or the `RUST_LOG` environment variable. Fails if another
/// global subscriber is already installed.
pub fn init_logging(level: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::info!(level, "montecarlo_core logging initialized");
    Ok(())
}
