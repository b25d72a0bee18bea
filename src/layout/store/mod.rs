//! Layout store holding the current per-breakpoint layouts.
//!
//! The store owns the generated defaults and every accepted edit. It is
//! mutated only through [`LayoutStore::reset_to_default`] and
//! [`LayoutStore::apply_edit`]; readers get owned snapshots. The store has
//! no interior mutability and no locks: it lives inside a single owner
//! (the [`Dashboard`](crate::dashboard::Dashboard) controller) that handles
//! one event at a time.

use crate::layout::{packer, BreakpointId, BreakpointTable, LayoutError, LayoutItem, Layouts};
use crate::widgets::WidgetRegistry;

#[cfg(test)]
mod tests;

mod edit;

pub use edit::OverlapPolicy;

/// Current layouts for every configured breakpoint.
///
/// # Example
///
/// ```
/// use gridboard::layout::{BreakpointId, BreakpointTable, LayoutStore};
/// use gridboard::widgets::WidgetRegistry;
///
/// let store = LayoutStore::new(WidgetRegistry::builtin(), BreakpointTable::default())
///     .expect("built-in configuration is valid");
/// let layouts = store.snapshot();
/// assert_eq!(layouts[&BreakpointId::Lg].len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct LayoutStore {
    /// Widget configuration, in packing order.
    registry: WidgetRegistry,
    /// Configured breakpoint tiers.
    breakpoints: BreakpointTable,
    /// Whether edits with overlapping items are accepted.
    overlap_policy: OverlapPolicy,
    /// Generated layouts, one entry per configured breakpoint.
    defaults: Layouts,
    /// Current layouts, one entry per configured breakpoint.
    layouts: Layouts,
}

impl LayoutStore {
    /// Creates a store holding freshly generated layouts.
    ///
    /// Fails with [`LayoutError::InvalidWidget`] when some breakpoint cannot
    /// be packed, e.g. a widget's minimum width is wider than its column
    /// count.
    pub fn new(registry: WidgetRegistry, breakpoints: BreakpointTable) -> Result<Self, LayoutError> {
        let defaults = generate(&registry, &breakpoints)?;
        tracing::debug!(
            widgets = registry.len(),
            breakpoints = defaults.len(),
            "Layout store initialized"
        );
        Ok(Self {
            registry,
            breakpoints,
            overlap_policy: OverlapPolicy::default(),
            layouts: defaults.clone(),
            defaults,
        })
    }

    /// Sets the overlap policy applied to future edits.
    pub fn with_overlap_policy(mut self, policy: OverlapPolicy) -> Self {
        self.overlap_policy = policy;
        self
    }

    /// The overlap policy applied to edits.
    pub fn overlap_policy(&self) -> OverlapPolicy {
        self.overlap_policy
    }

    /// The widget registry the layouts are generated from.
    pub fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }

    /// The configured breakpoint table.
    pub fn breakpoints(&self) -> &BreakpointTable {
        &self.breakpoints
    }

    /// Returns an owned copy of all current layouts.
    pub fn snapshot(&self) -> Layouts {
        self.layouts.clone()
    }

    /// Current layout for one breakpoint.
    pub fn layout(&self, breakpoint: BreakpointId) -> Option<&[LayoutItem]> {
        self.layouts.get(&breakpoint).map(Vec::as_slice)
    }

    /// Whether a breakpoint still holds its generated default layout.
    ///
    /// Returns `false` for breakpoints that are not configured.
    pub fn is_default(&self, breakpoint: BreakpointId) -> bool {
        match (self.layouts.get(&breakpoint), self.defaults.get(&breakpoint)) {
            (Some(current), Some(default)) => current == default,
            _ => false,
        }
    }

    /// Restores every breakpoint's generated layout, discarding all edits.
    pub fn reset_to_default(&mut self) {
        self.layouts = self.defaults.clone();
        tracing::info!("Layouts reset to defaults");
    }
}

/// Packs the registry for every configured breakpoint.
pub fn generate(
    registry: &WidgetRegistry,
    breakpoints: &BreakpointTable,
) -> Result<Layouts, LayoutError> {
    breakpoints
        .iter()
        .map(|spec| packer::pack(registry, spec).map(|items| (spec.id, items)))
        .collect()
}
