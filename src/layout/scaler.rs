//! Maps a widget's base size to a concrete size at a breakpoint.

use crate::layout::{BreakpointSpec, GridSize};
use crate::widgets::WidgetConfig;

/// Computes a widget's size at the given breakpoint.
///
/// The raw size comes from, in order of precedence:
/// 1. the widget's own `dimensions` entry for this breakpoint;
/// 2. the breakpoint's explicit size table entry for the widget type;
/// 3. the base size multiplied by the breakpoint's scale factor, rounded to
///    the nearest grid unit (halves round up).
///
/// Each dimension is then raised to the widget's minimum size. The result
/// is not limited to the column count; fitting into the grid is the
/// packer's job.
pub fn scale(widget: &WidgetConfig, breakpoint: &BreakpointSpec) -> GridSize {
    let raw = widget
        .dimensions
        .get(&breakpoint.id)
        .copied()
        .or_else(|| breakpoint.explicit_size(widget.widget_type()))
        .unwrap_or_else(|| scale_by(widget.base_size, breakpoint.scale_factor()));
    raw.clamp_min(widget.min_size)
}

/// Multiplies both dimensions by `factor` and rounds to whole grid units.
pub fn scale_by(base: GridSize, factor: f64) -> GridSize {
    GridSize::new(scale_dim(base.w, factor), scale_dim(base.h, factor))
}

fn scale_dim(value: u32, factor: f64) -> u32 {
    // Float-to-int `as` saturates, so oversized products cannot wrap.
    (f64::from(value) * factor).round() as u32
}
