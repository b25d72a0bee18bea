//! Tests for the LayoutStore module.
//!
//! Tests are organized into categories:
//! - `basic`: construction, snapshots and the documented scenarios
//! - `edit`: applying externally reported layouts
//! - `reset`: regenerating defaults after edits
//! - `invariants`: placement invariants over generated configurations

mod basic;

use super::LayoutStore;
use crate::layout::{BreakpointId, BreakpointTable, GridSize, LayoutItem};
use crate::widgets::{WidgetConfig, WidgetRegistry};

/// Registry of `count` summary cards with the given base size and a 1x1 minimum.
pub(super) fn cards(count: usize, base: GridSize) -> WidgetRegistry {
    WidgetRegistry::new(
        (0..count)
            .map(|n| {
                let id = format!("summary_card{n}");
                WidgetConfig::new(&id, &id, base, GridSize::new(1, 1))
            })
            .collect(),
    )
    .expect("valid registry")
}

/// Store over the built-in registry and default breakpoint table.
pub(super) fn builtin_store() -> LayoutStore {
    LayoutStore::new(WidgetRegistry::builtin(), BreakpointTable::default())
        .expect("built-in configuration is valid")
}

/// Current layout of `breakpoint`, cloned.
pub(super) fn layout_of(store: &LayoutStore, breakpoint: BreakpointId) -> Vec<LayoutItem> {
    store
        .layout(breakpoint)
        .expect("breakpoint configured")
        .to_vec()
}
