//! Tracing subscriber initialization.
//!
//! # Usage
//!
//! ```no_run
//! // Human-readable output for the CLI, RUST_LOG-driven filtering
//! portico_observe::tracing_setup::init_tracing(None, false).unwrap();
//!
//! // Explicit filter, line-delimited JSON for the server under a collector
//! portico_observe::tracing_setup::init_tracing(Some("info,portico=debug"), true).unwrap();
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize the global tracing subscriber.
///
/// - `filter`: an explicit filter directive (usually derived from CLI
///   verbosity flags); `None` falls back to `RUST_LOG` via
///   `EnvFilter::from_default_env()`.
/// - `json_output`: switch the fmt layer to line-delimited JSON, for the
///   server running under a log collector. The default is human-readable
///   output for interactive CLI use.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn init_tracing(filter: Option<&str>, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = match filter {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::from_default_env(),
    };

    if json_output {
        let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
