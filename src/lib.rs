//! gridboard library
//!
//! A breakpoint-aware layout engine for dashboards of widgets laid out on a
//! responsive grid. Given a widget registry and a breakpoint table it
//! computes every widget's position and size in grid units per breakpoint,
//! scaling base sizes across breakpoints while respecting minimum sizes and
//! column counts, and reconciles generated layouts with edits reported by a
//! drag-and-resize rendering surface.
//!
//! # Modules
//!
//! - [`layout`]: breakpoint resolution, scaling, packing, the layout store
//!   and pixel geometry.
//! - [`widgets`]: the ordered widget registry.
//! - [`dashboard`]: the controller owning the store and broadcasting changes.
//! - [`bridge`] and [`ipc`]: the JSON Lines protocol spoken with a rendering
//!   surface over stdin/stdout.
//! - [`config`]: TOML configuration with XDG path resolution.
//! - [`logging`]: `tracing` subscriber setup for the binary.
//!
//! # Example
//!
//! ```
//! use gridboard::layout::{BreakpointId, BreakpointTable, LayoutStore};
//! use gridboard::widgets::WidgetRegistry;
//!
//! let store = LayoutStore::new(WidgetRegistry::builtin(), BreakpointTable::default())?;
//! let lg = store.layout(BreakpointId::Lg).unwrap_or_default();
//! assert_eq!((lg[1].x, lg[1].y), (4, 0));
//! # Ok::<(), gridboard::layout::LayoutError>(())
//! ```

pub mod bridge;
pub mod config;
pub mod dashboard;
pub mod ipc;
pub mod layout;
pub mod logging;
pub mod widgets;

pub use dashboard::{Dashboard, DashboardEvent};
pub use layout::{BreakpointId, LayoutError, LayoutItem, LayoutStore, Layouts};
pub use widgets::{WidgetConfig, WidgetRegistry};
