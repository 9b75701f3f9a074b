//! Logging setup.
//!
//! Library code logs through both `log` (storage layer) and `tracing`
//! (service layer); `LogTracer` forwards `log` records into the tracing
//! subscriber so both end up in one stream.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LogFormat;

/// Installs the global subscriber. `RUST_LOG` takes precedence over
/// `default_level`. Only the first call has any effect.
pub fn init(default_level: &str, format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let (pretty, json) = match format {
        LogFormat::Pretty => (
            Some(fmt::layer().with_target(true).with_writer(std::io::stderr)),
            None,
        ),
        LogFormat::Json => (None, Some(fmt::layer().json().with_writer(std::io::stderr))),
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json);

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return;
    }
    bridge_log_records();
}

/// Routes `log` records into tracing. Returns false when another `log`
/// logger was installed first; its output is kept and ours is skipped.
fn bridge_log_records() -> bool {
    match tracing_log::LogTracer::init() {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "log records not bridged, a logger is already set");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init("debug", LogFormat::Pretty);
        init("info", LogFormat::Json);
        tracing::info!("still logging");
        log::info!("bridged from log");
    }

    #[test]
    fn test_second_log_bridge_is_reported() {
        bridge_log_records();
        assert!(!bridge_log_records());
    }
}
