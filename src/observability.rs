//! Logging setup for the binary.

use tracing_subscriber::EnvFilter;

use super::constants::LOG_ENV_VAR;

/// Installs a stderr subscriber.
///
/// The filter comes from the `NEWCOMER_GUIDE_LOG` environment variable when
/// set, otherwise `warn`, or `debug` for this crate when `verbose` is true.
/// Calling this more than once keeps the first subscriber.
pub fn init(verbose: bool) {
    let fallback = if verbose { "warn,newcomer_guide=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init()
        .is_ok();

    if !installed {
        tracing::debug!("tracing subscriber already installed");
    }
}
