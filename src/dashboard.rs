//! Dashboard controller.
//!
//! [`Dashboard`] owns the [`LayoutStore`] and the [`BreakpointTracker`] for
//! one dashboard and is the single place where layout state changes. Every
//! operation runs to completion before the next one starts; callers that
//! need to react to changes subscribe to [`DashboardEvent`]s.

use serde::Serialize;
use tokio::sync::broadcast;

use crate::layout::{BreakpointId, BreakpointTracker, LayoutError, LayoutItem, LayoutStore, Layouts};

/// Capacity of the notification channel. A bridge drains it after every
/// request, so a handful of slots is plenty; slow in-process consumers
/// observe `Lagged` rather than blocking the controller.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Change notification emitted by the controller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardEvent {
    /// The viewport crossed into a different breakpoint.
    #[serde(rename = "breakpoint_change")]
    BreakpointChanged {
        /// Newly active breakpoint.
        breakpoint: BreakpointId,
    },
    /// An edit was accepted for one breakpoint.
    #[serde(rename = "layout_change")]
    LayoutChanged {
        /// Breakpoint that was edited.
        breakpoint: BreakpointId,
        /// All layouts after the edit.
        layouts: Layouts,
    },
    /// Every breakpoint was regenerated from defaults.
    LayoutsReset {
        /// All layouts after the reset.
        layouts: Layouts,
    },
}

/// Top-level owner of the layout state of one dashboard.
///
/// # Example
///
/// ```
/// use gridboard::dashboard::Dashboard;
/// use gridboard::layout::{BreakpointId, BreakpointTable, LayoutStore};
/// use gridboard::widgets::WidgetRegistry;
///
/// let store = LayoutStore::new(WidgetRegistry::builtin(), BreakpointTable::default())
///     .expect("builtin registry fits the default table");
/// let mut dashboard = Dashboard::new(store);
/// assert_eq!(dashboard.viewport_resized(1024), BreakpointId::Md);
/// ```
pub struct Dashboard {
    store: LayoutStore,
    tracker: BreakpointTracker,
    events: broadcast::Sender<DashboardEvent>,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("store", &self.store)
            .field("breakpoint", &self.tracker.current())
            .field("subscriber_count", &self.events.receiver_count())
            .finish()
    }
}

impl Dashboard {
    /// Wraps a store. No breakpoint is active until the first resize.
    pub fn new(store: LayoutStore) -> Self {
        let (events, _rx) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            store,
            tracker: BreakpointTracker::new(),
            events,
        }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &LayoutStore {
        &self.store
    }

    /// Breakpoint resolved by the last resize, if any.
    pub fn current_breakpoint(&self) -> Option<BreakpointId> {
        self.tracker.current()
    }

    /// Resolves `width` and returns the active breakpoint.
    ///
    /// Emits [`DashboardEvent::BreakpointChanged`] only when the breakpoint
    /// differs from the previously active one (the first resize always does).
    pub fn viewport_resized(&mut self, width: u32) -> BreakpointId {
        match self.tracker.observe(self.store.breakpoints(), width) {
            Some(breakpoint) => {
                self.broadcast(DashboardEvent::BreakpointChanged { breakpoint });
                breakpoint
            }
            None => self
                .tracker
                .current()
                .unwrap_or_else(|| self.store.breakpoints().resolve(width)),
        }
    }

    /// Applies a layout edit reported by the rendering surface.
    ///
    /// On success emits [`DashboardEvent::LayoutChanged`] carrying every
    /// breakpoint's layout. On failure the state and subscribers are left
    /// untouched.
    pub fn apply_edit(
        &mut self,
        breakpoint: BreakpointId,
        items: Vec<LayoutItem>,
    ) -> Result<(), LayoutError> {
        if let Err(e) = self.store.apply_edit(breakpoint, items) {
            tracing::warn!(%breakpoint, "Rejected layout edit: {e}");
            return Err(e);
        }
        self.broadcast(DashboardEvent::LayoutChanged {
            breakpoint,
            layouts: self.store.snapshot(),
        });
        Ok(())
    }

    /// Discards all edits and emits [`DashboardEvent::LayoutsReset`].
    pub fn reset(&mut self) {
        self.store.reset_to_default();
        self.broadcast(DashboardEvent::LayoutsReset {
            layouts: self.store.snapshot(),
        });
    }

    /// Owned copy of all current layouts.
    pub fn snapshot(&self) -> Layouts {
        self.store.snapshot()
    }

    /// Subscribes to change notifications.
    ///
    /// Only events sent after this call are received.
    pub fn subscribe(&self) -> broadcast::Receiver<DashboardEvent> {
        self.events.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.events.receiver_count()
    }

    fn broadcast(&self, event: DashboardEvent) {
        match self.events.send(event) {
            Ok(count) => tracing::trace!("Dashboard event sent to {} subscribers", count),
            Err(_) => tracing::trace!("No subscribers for dashboard event"),
        }
    }
}
