//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogConfig;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured filter; `--verbose` raises both
/// crates to debug. Logs go to stderr so listings on stdout stay clean.
pub fn init(config: &LogConfig, verbose: bool) {
    let fallback = if verbose {
        "storefront=debug,storefront_commerce=debug".to_string()
    } else {
        config.filter.clone()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
