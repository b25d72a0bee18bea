//! Layout engine for the dashboard grid.
//!
//! Given a [`WidgetRegistry`](crate::widgets::WidgetRegistry) and a
//! [`BreakpointTable`], the engine computes every widget's position and size
//! in grid units for each breakpoint:
//!
//! - [`breakpoint`]: viewport width to breakpoint resolution;
//! - [`scaler`]: base size to per-breakpoint size, clamped to minimums;
//! - [`packer`]: deterministic row-wrap placement;
//! - [`LayoutStore`]: current layouts, reset and edit reconciliation;
//! - [`geometry`]: grid units to pixel rectangles.

pub mod breakpoint;
pub mod geometry;
pub mod packer;
pub mod scaler;

mod error;
mod item;
mod store;

pub use breakpoint::{
    BreakpointId, BreakpointSpec, BreakpointTable, BreakpointTracker, ParseBreakpointError,
};
pub use error::LayoutError;
pub use geometry::{GridGeometry, PixelRect};
pub use item::{GridSize, LayoutItem, Layouts};
pub use store::{generate, LayoutStore, OverlapPolicy};
