//! Logging setup.
//!
//! The terminal belongs to the renderer, so logs go to a file or nowhere.

use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::StarfieldError;

/// Installs a file logger. `RUST_LOG` takes precedence over `level`.
/// Without a `log_file` nothing is installed and events are discarded.
pub fn init_logging(log_file: Option<&Path>, level: &str) -> Result<(), StarfieldError> {
    let Some(path) = log_file else {
        return Ok(());
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path)?;

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(file_layer)
        .try_init()
        .map_err(|e| StarfieldError::Logging(e.to_string()))
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}
