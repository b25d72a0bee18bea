//! Default configuration template and file creation utilities.
//!
//! Provides a commented TOML template that matches `Config::default()` and
//! functions to write it to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

// ---------------------------------------------------------------------------
// Default TOML template
// ---------------------------------------------------------------------------

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# gridboard configuration
#
# This file was auto-generated with default values.
# All values shown below are the built-in defaults.
#
# Location: $XDG_CONFIG_HOME/gridboard/config.toml

# ==============================================================================
# Grid
# ==============================================================================

[grid]

# What to do when an edited layout contains overlapping items.
# Options: "allow", "reject"
#   allow  - store the layout as given (the rendering surface compacts it)
#   reject - refuse the edit and keep the previous layout
overlap_policy = "allow"

# Pixel geometry used when converting grid units to pixel rectangles.
row_height = 20
margin = [5, 5]
container_padding = [0, 0]

# Breakpoint tiers. A viewport selects the tier with the largest threshold
# not exceeding its width; the smallest tier must have threshold 0.
#
# Each tier may set:
#   scale - multiplier for widget base sizes (rounded half away from zero)
#   sizes - explicit sizes per widget type, e.g.
#           sizes = { summary = { w = 3, h = 3 } }
# Widget types are the id prefix before the first underscore.

[[grid.breakpoints]]
id = "lg"
threshold = 1200
columns = 12
scale = 1.0

[[grid.breakpoints]]
id = "md"
threshold = 996
columns = 10
scale = 0.8

[[grid.breakpoints]]
id = "sm"
threshold = 768
columns = 8
scale = 0.6

[[grid.breakpoints]]
id = "xs"
threshold = 480
columns = 6
scale = 0.4

[[grid.breakpoints]]
id = "xxs"
threshold = 0
columns = 4
scale = 0.3

# ==============================================================================
# Widgets
# ==============================================================================
#
# Widgets are packed left to right, top to bottom, in the order listed here.
# Declaring any [[widgets]] entry replaces this whole list.
#
# Optional per-widget overrides for a single breakpoint:
#   dimensions = { xxs = { w = 4, h = 3 } }

[[widgets]]
id = "summary_totalDistance"
title = "Total Distance"
base_size = { w = 4, h = 5 }
min_size = { w = 2, h = 2 }
metric = "totalDistance"
allow_metric_change = true

[[widgets]]
id = "summary_avgSpeed"
title = "Average Speed"
base_size = { w = 4, h = 5 }
min_size = { w = 2, h = 2 }
metric = "averageSpeed"
allow_metric_change = true

[[widgets]]
id = "summary_elevationGain"
title = "Elevation Gain"
base_size = { w = 4, h = 5 }
min_size = { w = 2, h = 2 }
metric = "elevationGain"
allow_metric_change = true

[[widgets]]
id = "summary_movingTime"
title = "Moving Time"
base_size = { w = 4, h = 5 }
min_size = { w = 2, h = 2 }
metric = "movingTime"
allow_metric_change = true

[[widgets]]
id = "summary_maxPower"
title = "Max Power"
base_size = { w = 4, h = 5 }
min_size = { w = 2, h = 2 }
metric = "maxPower"
allow_metric_change = true

[[widgets]]
id = "summary_avgHeartRate"
title = "Average Heart Rate"
base_size = { w = 4, h = 5 }
min_size = { w = 2, h = 2 }
metric = "averageHeartRate"
allow_metric_change = true

[[widgets]]
id = "summary_avgCadence"
title = "Average Cadence"
base_size = { w = 4, h = 5 }
min_size = { w = 2, h = 2 }
metric = "averageCadence"
allow_metric_change = true

[[widgets]]
id = "summary_calories"
title = "Calories"
base_size = { w = 4, h = 5 }
min_size = { w = 2, h = 2 }
metric = "calories"
allow_metric_change = true

[[widgets]]
id = "chart_speedTrend"
title = "Speed Over Time"
base_size = { w = 8, h = 6 }
min_size = { w = 4, h = 3 }

[[widgets]]
id = "chart_elevationProfile"
title = "Elevation Profile"
base_size = { w = 8, h = 6 }
min_size = { w = 4, h = 3 }

# ==============================================================================
# Logging
# ==============================================================================

[log]

# Logging verbosity. GRIDBOARD_LOG overrides this when set.
# Options: "error", "warn", "info", "debug", "trace"
level = "info"

# Path to log file. Empty string means log to stderr.
file = ""
"#;

// ---------------------------------------------------------------------------
// File creation functions
// ---------------------------------------------------------------------------

/// Writes the default template to `path`, or to the XDG config path when
/// `path` is `None`.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
///
/// Returns the path where the config was written.
pub fn create_default_config(path: Option<&Path>, force: bool) -> Result<PathBuf, ConfigError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(xdg::config_path);

    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists { path });
        }
        let backup_path = path.with_extension("toml.backup");
        fs::rename(&path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(&path)?;
    tracing::info!("Created default configuration at {}", path.display());
    Ok(path)
}

/// Writes the template to `path`, creating parent dirs and setting 0600 permissions.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error = |source| ConfigError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            xdg::ensure_dir(parent).map_err(write_error)?;
        }
    }

    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(write_error)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(write_error)?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
