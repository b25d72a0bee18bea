//! Deterministic row-wrap placement of widgets on the grid.
//!
//! Widgets are placed left to right in registry order. When the next widget
//! does not fit in the remaining columns the cursor moves to the start of a
//! new row, which begins below the most recently placed widget. The row
//! height is therefore the height of the *last* item in the row, not the
//! tallest one: rows that mix heights can overlap vertically. This is the
//! established behaviour and callers rely on its exact coordinates.

use crate::layout::{scaler, BreakpointSpec, LayoutError, LayoutItem};
use crate::widgets::WidgetRegistry;

/// Places every registered widget for one breakpoint.
///
/// Output has one item per widget, in registry order. Calling this twice
/// with the same inputs yields identical output.
///
/// Widths wider than the column count are narrowed to fit. Fails with
/// [`LayoutError::InvalidWidget`] when a widget's minimum width exceeds the
/// column count, since narrowing would then break the minimum, or when the
/// rows run past the largest representable grid row.
pub fn pack(
    registry: &WidgetRegistry,
    breakpoint: &BreakpointSpec,
) -> Result<Vec<LayoutItem>, LayoutError> {
    let columns = breakpoint.columns;
    let mut items = Vec::with_capacity(registry.len());
    let mut x = 0u32;
    let mut y = 0u32;
    let mut last_height = 0u32;

    for widget in registry.iter() {
        if widget.min_size.w > columns {
            return Err(LayoutError::widget(
                &widget.id,
                format!(
                    "minimum width {} exceeds the {} columns of breakpoint '{}'",
                    widget.min_size.w, columns, breakpoint.id
                ),
            ));
        }
        let size = scaler::scale(widget, breakpoint);
        let w = size.w.min(columns);
        let h = size.h;

        // x never exceeds columns, so the subtraction cannot underflow.
        if w > columns - x {
            x = 0;
            y = y.checked_add(last_height).ok_or_else(|| {
                LayoutError::widget(
                    &widget.id,
                    format!("rows at breakpoint '{}' exceed the grid", breakpoint.id),
                )
            })?;
        }

        items.push(LayoutItem {
            id: widget.id.clone(),
            x,
            y,
            w,
            h,
            min_w: widget.min_size.w,
            min_h: widget.min_size.h,
        });
        x += w;
        last_height = h;
    }

    tracing::trace!(
        breakpoint = %breakpoint.id,
        columns,
        items = items.len(),
        rows_end = y.saturating_add(last_height),
        "Packed layout"
    );
    Ok(items)
}
