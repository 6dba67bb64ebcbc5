//! Logging setup shared by the driver binaries.

use crate::config::DemoConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured `log_level` applies.
/// Calling this twice is harmless: the second install is ignored.
pub fn init(config: &DemoConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).without_time())
        .try_init();
}
