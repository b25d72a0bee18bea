//! TOML configuration schema types for gridboard.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so an empty file yields the built-in dashboard: the
//! default breakpoint table and the built-in widget registry.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::layout::{BreakpointSpec, BreakpointTable, GridGeometry, LayoutStore, OverlapPolicy};
use crate::widgets::{WidgetConfig, WidgetRegistry};

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration encompassing all sections.
///
/// Corresponds to the full TOML file structure:
/// ```toml
/// [grid]
/// [[grid.breakpoints]]
/// [[widgets]]
/// [log]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Grid geometry, edit policy and breakpoint table.
    pub grid: GridConfig,
    /// Widget registry in packing order. Replaces the built-in registry
    /// when present.
    pub widgets: Vec<WidgetConfig>,
    /// Logging settings.
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            widgets: default_widgets(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Validated breakpoint table.
    pub fn breakpoint_table(&self) -> Result<BreakpointTable, ConfigError> {
        Ok(BreakpointTable::new(self.grid.breakpoints.clone())?)
    }

    /// Validated widget registry.
    pub fn registry(&self) -> Result<WidgetRegistry, ConfigError> {
        Ok(WidgetRegistry::new(self.widgets.clone())?)
    }

    /// Builds the layout store described by this configuration.
    ///
    /// Fails fast, before any layout is generated, on invalid breakpoints,
    /// invalid widgets, or widgets that cannot fit some breakpoint.
    pub fn layout_store(&self) -> Result<LayoutStore, ConfigError> {
        let store = LayoutStore::new(self.registry()?, self.breakpoint_table()?)?;
        Ok(store.with_overlap_policy(self.grid.overlap_policy))
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// Grid configuration from the `[grid]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    /// Whether edits with overlapping items are rejected.
    pub overlap_policy: OverlapPolicy,
    /// Height of one grid row in pixels.
    pub row_height: u32,
    /// `[x, y]` gap between items in pixels.
    pub margin: [u32; 2],
    /// `[x, y]` padding inside the grid container in pixels.
    pub container_padding: [u32; 2],
    /// Breakpoint tiers; any order, sorted by threshold on load.
    pub breakpoints: Vec<BreakpointSpec>,
}

impl GridConfig {
    /// Pixel geometry described by this section.
    pub fn geometry(&self) -> GridGeometry {
        GridGeometry {
            row_height: self.row_height,
            margin: self.margin,
            container_padding: self.container_padding,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        let geometry = GridGeometry::default();
        Self {
            overlap_policy: OverlapPolicy::default(),
            row_height: geometry.row_height,
            margin: geometry.margin,
            container_padding: geometry.container_padding,
            breakpoints: BreakpointTable::default().iter().cloned().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Widgets
// ---------------------------------------------------------------------------

/// Widgets of the built-in registry, in packing order.
pub fn default_widgets() -> Vec<WidgetConfig> {
    WidgetRegistry::builtin().iter().cloned().collect()
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Logging configuration from the `[log]` section.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Logging verbosity.
    pub level: LogLevel,
    /// Path to log file. Empty string means stderr.
    pub file: String,
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Informational messages (default).
    #[default]
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// `EnvFilter` directive for this level.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
