//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Environment, LoggingConfig};

/// Installs the global subscriber.
///
/// `RUST_LOG` overrides the configured filter. Returns `false` when a
/// subscriber was already installed, e.g. by the host or another test.
pub fn init_tracing(config: &LoggingConfig, environment: Environment) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let dev = environment == Environment::Development;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(dev)
        .with_line_number(dev);

    let installed = if config.use_json(environment) {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.pretty())
            .try_init()
    };

    if installed.is_ok() {
        tracing::info!("Logging initialized for {:?} environment", environment);
    }
    installed.is_ok()
}
