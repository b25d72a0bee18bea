//! Breakpoint identifiers, the configured breakpoint table and width
//! resolution.
//!
//! A breakpoint is a named viewport-width tier. Each configured tier carries
//! a pixel threshold, a column count and the sizing rule the
//! [`scaler`](crate::layout::scaler) applies to widgets at that tier.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::layout::{GridSize, LayoutError};

/// One of the fixed breakpoint tiers, ordered from widest to narrowest.
///
/// The derived `Ord` follows declaration order, so `Lg < Md < ... < Xxs`
/// and ordered maps keyed by `BreakpointId` list the widest tier first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakpointId {
    /// Large desktop.
    Lg,
    /// Medium desktop / landscape tablet.
    Md,
    /// Small, portrait tablet.
    Sm,
    /// Large phone.
    Xs,
    /// Anything narrower.
    Xxs,
}

impl BreakpointId {
    /// All tiers, widest first.
    pub const ALL: [BreakpointId; 5] = [
        BreakpointId::Lg,
        BreakpointId::Md,
        BreakpointId::Sm,
        BreakpointId::Xs,
        BreakpointId::Xxs,
    ];

    /// Lowercase identifier used in configuration and on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            BreakpointId::Lg => "lg",
            BreakpointId::Md => "md",
            BreakpointId::Sm => "sm",
            BreakpointId::Xs => "xs",
            BreakpointId::Xxs => "xxs",
        }
    }

    /// Scale factor applied to base sizes when a spec does not set one.
    pub fn default_scale(self) -> f64 {
        match self {
            BreakpointId::Lg => 1.0,
            BreakpointId::Md => 0.8,
            BreakpointId::Sm => 0.6,
            BreakpointId::Xs => 0.4,
            BreakpointId::Xxs => 0.3,
        }
    }

    fn default_spec(self) -> BreakpointSpec {
        let (threshold, columns) = match self {
            BreakpointId::Lg => (1200, 12),
            BreakpointId::Md => (996, 10),
            BreakpointId::Sm => (768, 8),
            BreakpointId::Xs => (480, 6),
            BreakpointId::Xxs => (0, 4),
        };
        BreakpointSpec {
            id: self,
            threshold,
            columns,
            scale: Some(self.default_scale()),
            sizes: BTreeMap::new(),
        }
    }
}

impl fmt::Display for BreakpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing a [`BreakpointId`] from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBreakpointError(pub String);

impl fmt::Display for ParseBreakpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid breakpoint: {} (expected one of lg, md, sm, xs, xxs)",
            self.0
        )
    }
}

impl std::error::Error for ParseBreakpointError {}

impl FromStr for BreakpointId {
    type Err = ParseBreakpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lg" => Ok(BreakpointId::Lg),
            "md" => Ok(BreakpointId::Md),
            "sm" => Ok(BreakpointId::Sm),
            "xs" => Ok(BreakpointId::Xs),
            "xxs" => Ok(BreakpointId::Xxs),
            _ => Err(ParseBreakpointError(s.to_string())),
        }
    }
}

/// Configuration for a single breakpoint tier.
///
/// Sizing works in one of two modes:
/// - uniform: every widget's base size is multiplied by [`scale`](Self::scale_factor);
/// - explicit: `sizes` maps a widget type (the id prefix, e.g. `summary`)
///   to a fixed size that replaces the scaled one. Widget types absent from
///   the table still fall back to the scale factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakpointSpec {
    /// Tier identifier.
    pub id: BreakpointId,
    /// Smallest viewport width (pixels) that selects this tier.
    pub threshold: u32,
    /// Number of grid columns at this tier.
    pub columns: u32,
    /// Multiplier for base sizes. Defaults to the tier's built-in factor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Explicit sizes keyed by widget type.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub sizes: BTreeMap<String, GridSize>,
}

impl BreakpointSpec {
    /// Creates a uniformly scaled spec.
    pub fn new(id: BreakpointId, threshold: u32, columns: u32, scale: f64) -> Self {
        Self {
            id,
            threshold,
            columns,
            scale: Some(scale),
            sizes: BTreeMap::new(),
        }
    }

    /// Adds an explicit size for a widget type.
    pub fn with_size(mut self, widget_type: &str, size: GridSize) -> Self {
        self.sizes.insert(widget_type.to_string(), size);
        self
    }

    /// Effective scale factor for this tier.
    pub fn scale_factor(&self) -> f64 {
        self.scale.unwrap_or_else(|| self.id.default_scale())
    }

    /// Explicit size configured for a widget type, if any.
    pub fn explicit_size(&self, widget_type: &str) -> Option<GridSize> {
        self.sizes.get(widget_type).copied()
    }
}

/// Validated set of breakpoint specs, held in descending threshold order.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointTable {
    specs: Vec<BreakpointSpec>,
}

impl BreakpointTable {
    /// Validates and sorts the given specs.
    ///
    /// Rejects an empty table, repeated ids or thresholds, zero column
    /// counts, non-positive or non-finite scale factors and explicit entries
    /// that are zero-sized or above [`GridSize::MAX_UNITS`].
    pub fn new(mut specs: Vec<BreakpointSpec>) -> Result<Self, LayoutError> {
        if specs.is_empty() {
            return Err(LayoutError::InvalidBreakpoints(
                "at least one breakpoint is required".to_string(),
            ));
        }

        let mut ids = HashSet::new();
        let mut thresholds = HashSet::new();
        for spec in &specs {
            if !ids.insert(spec.id) {
                return Err(LayoutError::InvalidBreakpoints(format!(
                    "breakpoint '{}' is defined more than once",
                    spec.id
                )));
            }
            if !thresholds.insert(spec.threshold) {
                return Err(LayoutError::InvalidBreakpoints(format!(
                    "threshold {} is used by more than one breakpoint",
                    spec.threshold
                )));
            }
            if spec.columns == 0 {
                return Err(LayoutError::InvalidBreakpoints(format!(
                    "breakpoint '{}' must have at least one column",
                    spec.id
                )));
            }
            let scale = spec.scale_factor();
            if !scale.is_finite() || scale <= 0.0 {
                return Err(LayoutError::InvalidBreakpoints(format!(
                    "breakpoint '{}' has invalid scale factor {}",
                    spec.id, scale
                )));
            }
            if let Some((kind, _)) = spec.sizes.iter().find(|(_, s)| s.w == 0 || s.h == 0) {
                return Err(LayoutError::InvalidBreakpoints(format!(
                    "breakpoint '{}' has a zero-sized entry for '{}'",
                    spec.id, kind
                )));
            }
            if let Some((kind, _)) = spec.sizes.iter().find(|(_, s)| s.exceeds_limit()) {
                return Err(LayoutError::InvalidBreakpoints(format!(
                    "breakpoint '{}' has an entry for '{}' above {} grid units",
                    spec.id,
                    kind,
                    GridSize::MAX_UNITS
                )));
            }
        }

        specs.sort_by(|a, b| b.threshold.cmp(&a.threshold));
        Ok(Self { specs })
    }

    /// Specs in descending threshold order.
    pub fn iter(&self) -> impl Iterator<Item = &BreakpointSpec> {
        self.specs.iter()
    }

    /// Configured ids in descending threshold order.
    pub fn ids(&self) -> impl Iterator<Item = BreakpointId> + '_ {
        self.specs.iter().map(|s| s.id)
    }

    /// Looks up the spec for a breakpoint.
    pub fn get(&self, id: BreakpointId) -> Option<&BreakpointSpec> {
        self.specs.iter().find(|s| s.id == id)
    }

    /// Column count for a breakpoint, if configured.
    pub fn columns(&self, id: BreakpointId) -> Option<u32> {
        self.get(id).map(|s| s.columns)
    }

    /// The spec with the lowest threshold.
    pub fn smallest(&self) -> &BreakpointSpec {
        // `new` rejects empty tables.
        &self.specs[self.specs.len() - 1]
    }

    /// Maps a viewport width to a breakpoint.
    ///
    /// Returns the first tier (widest first) whose threshold is `<= width`.
    /// When no threshold matches, which only happens if the smallest
    /// threshold is above zero, falls back to the smallest tier and logs a
    /// warning.
    pub fn resolve(&self, width: u32) -> BreakpointId {
        match self.specs.iter().find(|s| s.threshold <= width) {
            Some(spec) => spec.id,
            None => {
                let fallback = self.smallest();
                tracing::warn!(
                    width,
                    threshold = fallback.threshold,
                    "No breakpoint threshold matches width, falling back to '{}'",
                    fallback.id
                );
                fallback.id
            }
        }
    }
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self {
            specs: BreakpointId::ALL.iter().map(|id| id.default_spec()).collect(),
        }
    }
}

/// Remembers the last resolved breakpoint so redundant resizes stay quiet.
#[derive(Debug, Clone, Default)]
pub struct BreakpointTracker {
    current: Option<BreakpointId>,
}

impl BreakpointTracker {
    /// Creates a tracker that has not observed any width yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently resolved breakpoint.
    pub fn current(&self) -> Option<BreakpointId> {
        self.current
    }

    /// Resolves `width` and returns the new breakpoint only if it changed.
    ///
    /// The first observation always reports.
    pub fn observe(&mut self, table: &BreakpointTable, width: u32) -> Option<BreakpointId> {
        let resolved = table.resolve(width);
        if self.current == Some(resolved) {
            return None;
        }
        tracing::debug!(
            from = ?self.current,
            to = %resolved,
            width,
            "Breakpoint changed"
        );
        self.current = Some(resolved);
        Some(resolved)
    }
}
