//! Logging initialization for the gridboard binary.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `GRIDBOARD_LOG` environment variable, falling back to the `[log] level`
//! from the configuration file.
//!
//! # Usage
//!
//! ```bash
//! # Configured level (info by default)
//! gridboard bridge
//!
//! # Debug level
//! GRIDBOARD_LOG=debug gridboard bridge
//!
//! # Module-specific filtering
//! GRIDBOARD_LOG=gridboard::layout=trace,warn gridboard layouts
//! ```
//!
//! Output goes to stderr, or to `[log] file` when set. Stdout is reserved
//! for command and bridge output.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{xdg, LogConfig};

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "GRIDBOARD_LOG";

/// Builds the filter: `GRIDBOARD_LOG` when set and valid, otherwise the
/// configured level.
pub fn filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(config.level.as_directive()))
}

/// Initializes the global subscriber.
///
/// Fails only when the configured log file cannot be opened. A second call
/// leaves the first subscriber in place.
pub fn init(config: &LogConfig) -> std::io::Result<()> {
    let filter = filter(config);
    let builder = fmt().with_env_filter(filter).with_target(false);

    if config.file.is_empty() {
        let _ = builder.with_writer(std::io::stderr).try_init();
    } else {
        let path = xdg::expand_tilde(&config.file);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let _ = builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init();
    }
    Ok(())
}
