//! Error types raised while validating breakpoint tables, widget registries
//! and externally reported layout edits.

use thiserror::Error;

use crate::layout::BreakpointId;

/// Errors produced by the layout engine.
///
/// Every variant is recoverable: configuration variants are raised at load
/// time before any layout exists, edit variants leave the store untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A widget entry in the registry is unusable.
    #[error("Invalid widget '{id}': {reason}")]
    InvalidWidget {
        /// Identifier of the offending widget (may be empty).
        id: String,
        /// Human-readable description of the problem.
        reason: String,
    },

    /// The breakpoint table is unusable.
    #[error("Invalid breakpoint table: {0}")]
    InvalidBreakpoints(String),

    /// The requested breakpoint is not part of the configured table.
    #[error("Breakpoint '{0}' is not configured")]
    UnknownBreakpoint(BreakpointId),

    /// An edited layout does not cover exactly the registry's widgets.
    #[error(
        "Layout for '{breakpoint}' does not match the widget registry \
         (missing: {missing:?}, unexpected: {unexpected:?}, duplicate: {duplicate:?})"
    )]
    IdMismatch {
        /// Breakpoint the edit targeted.
        breakpoint: BreakpointId,
        /// Registry ids absent from the edit.
        missing: Vec<String>,
        /// Ids in the edit that the registry does not know.
        unexpected: Vec<String>,
        /// Ids that appear more than once in the edit.
        duplicate: Vec<String>,
    },

    /// A single edited item violates a placement invariant.
    #[error("Invalid item '{id}' in '{breakpoint}' layout: {reason}")]
    InvalidItem {
        /// Breakpoint the edit targeted.
        breakpoint: BreakpointId,
        /// Identifier of the offending item.
        id: String,
        /// Which invariant failed.
        reason: String,
    },

    /// Two edited items share grid cells while overlaps are rejected.
    #[error("Items '{first}' and '{second}' overlap in '{breakpoint}' layout")]
    Overlap {
        /// Breakpoint the edit targeted.
        breakpoint: BreakpointId,
        /// Earlier item (in edit order).
        first: String,
        /// Later item (in edit order).
        second: String,
    },
}

impl LayoutError {
    pub(crate) fn widget(id: &str, reason: impl Into<String>) -> Self {
        LayoutError::InvalidWidget {
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}
