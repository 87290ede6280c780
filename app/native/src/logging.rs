//! Logging setup.
//!
//! Events go to stderr. `RUST_LOG` overrides the default filter, e.g.
//! `RUST_LOG=recenter_lib=trace` to see every window the filter passes over.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is not set.
#[must_use]
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "recenter_lib=debug,recenter=debug" } else { "recenter_lib=info,recenter=info" }
}

/// Installs the global subscriber. Calling it twice is a no-op.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();

    if result.is_err() {
        tracing::trace!("logging already initialized");
    }
}
