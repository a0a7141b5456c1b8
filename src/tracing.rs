//! Tracing (logging)

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initlialise tracing (logging)
///
/// Applies a filter based on the `RUST_LOG` environment variable, falling back to enable debug
/// logging for this crate if not set.
///
/// The library itself only emits events and spans. Applications call this once to print them.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "downsampler=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialise tracing, ignoring any subscriber that is already installed.
///
/// Useful in tests, where several test cases may attempt initialisation.
pub fn try_init_tracing() -> bool {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "downsampler=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init()
        .is_ok()
}
