//! Diagnostic logging setup.
//!
//! Logging is off unless `PRO_LOG` holds an `EnvFilter` directive such as
//! `debug` or `pro=trace`. Events go to stderr so they never mix with output
//! the user or a script may parse.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PRO_LOG";

/// Installs the global subscriber. Calling it more than once is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    let terminal_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(terminal_layer)
        .try_init()
        .ok();
}
