//! Widget registry for the dashboard.
//!
//! The registry is the immutable configuration the layout engine packs:
//! an insertion-ordered collection of [`WidgetConfig`] keyed by id. Order is
//! significant because it is the packing order, so the registry is backed by
//! an [`IndexMap`] rather than a hash map and iterates in exactly the order
//! widgets were declared.
//!
//! # Example
//!
//! ```
//! use gridboard::widgets::WidgetRegistry;
//!
//! let registry = WidgetRegistry::builtin();
//! let ids: Vec<&str> = registry.ids().collect();
//! assert_eq!(ids[0], "summary_totalDistance");
//! assert_eq!(registry.get("chart_speedTrend").map(|w| w.widget_type()), Some("chart"));
//! ```

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::layout::{BreakpointId, GridSize, LayoutError};

/// Configuration of one dashboard widget.
///
/// Ids follow the `<type>_<metric>` convention; the type prefix selects
/// entries from a breakpoint's explicit size table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Unique identifier, e.g. `summary_avgSpeed`.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Size at the widest breakpoint, in grid units.
    pub base_size: GridSize,
    /// Smallest legible size, in grid units.
    pub min_size: GridSize,
    /// Metric shown by default. Data fetching happens outside the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    /// Whether the user may switch the displayed metric.
    #[serde(default)]
    pub allow_metric_change: bool,
    /// Per-breakpoint sizes that override all scaling for this widget.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dimensions: BTreeMap<BreakpointId, GridSize>,
}

impl WidgetConfig {
    /// Creates a widget with no metric and no explicit dimensions.
    pub fn new(id: &str, title: &str, base_size: GridSize, min_size: GridSize) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            base_size,
            min_size,
            metric: None,
            allow_metric_change: false,
            dimensions: BTreeMap::new(),
        }
    }

    /// Sets the default metric and allows switching it.
    pub fn with_metric(mut self, metric: &str) -> Self {
        self.metric = Some(metric.to_string());
        self.allow_metric_change = true;
        self
    }

    /// Pins this widget's size at one breakpoint.
    pub fn with_dimension(mut self, breakpoint: BreakpointId, size: GridSize) -> Self {
        self.dimensions.insert(breakpoint, size);
        self
    }

    /// Widget type: the id up to the first `_`, or the whole id.
    pub fn widget_type(&self) -> &str {
        self.id.split('_').next().unwrap_or(&self.id)
    }

    fn validate(&self) -> Result<(), LayoutError> {
        if self.id.trim().is_empty() {
            return Err(LayoutError::widget(&self.id, "id must not be empty"));
        }
        for (label, size) in [("base", self.base_size), ("minimum", self.min_size)] {
            if size.w == 0 || size.h == 0 {
                return Err(LayoutError::widget(
                    &self.id,
                    format!("{label} size must be positive, got {}x{}", size.w, size.h),
                ));
            }
            if size.exceeds_limit() {
                return Err(LayoutError::widget(
                    &self.id,
                    format!(
                        "{label} size {}x{} exceeds the limit of {} grid units",
                        size.w,
                        size.h,
                        GridSize::MAX_UNITS
                    ),
                ));
            }
        }
        for (bp, size) in &self.dimensions {
            if size.w == 0 || size.h == 0 {
                return Err(LayoutError::widget(
                    &self.id,
                    format!("dimension for '{bp}' must be positive, got {}x{}", size.w, size.h),
                ));
            }
            if size.exceeds_limit() {
                return Err(LayoutError::widget(
                    &self.id,
                    format!(
                        "dimension for '{bp}' exceeds the limit of {} grid units",
                        GridSize::MAX_UNITS
                    ),
                ));
            }
        }
        Ok(())
    }
}

/// Ordered, id-keyed widget registry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetRegistry {
    widgets: IndexMap<String, WidgetConfig>,
}

impl WidgetRegistry {
    /// Builds a registry, preserving the given order.
    ///
    /// Fails on empty or duplicate ids, on non-positive sizes and on sizes
    /// above [`GridSize::MAX_UNITS`].
    pub fn new(widgets: Vec<WidgetConfig>) -> Result<Self, LayoutError> {
        let mut map = IndexMap::with_capacity(widgets.len());
        for widget in widgets {
            widget.validate()?;
            if map.contains_key(&widget.id) {
                return Err(LayoutError::widget(&widget.id, "id is registered more than once"));
            }
            map.insert(widget.id.clone(), widget);
        }
        Ok(Self { widgets: map })
    }

    /// The built-in ride summary dashboard: eight summary cards followed by
    /// two line charts.
    pub fn builtin() -> Self {
        const SUMMARY: GridSize = GridSize::new(4, 5);
        const SUMMARY_MIN: GridSize = GridSize::new(2, 2);
        const CHART: GridSize = GridSize::new(8, 6);
        const CHART_MIN: GridSize = GridSize::new(4, 3);

        let summaries = [
            ("summary_totalDistance", "Total Distance", "totalDistance"),
            ("summary_avgSpeed", "Average Speed", "averageSpeed"),
            ("summary_elevationGain", "Elevation Gain", "elevationGain"),
            ("summary_movingTime", "Moving Time", "movingTime"),
            ("summary_maxPower", "Max Power", "maxPower"),
            ("summary_avgHeartRate", "Average Heart Rate", "averageHeartRate"),
            ("summary_avgCadence", "Average Cadence", "averageCadence"),
            ("summary_calories", "Calories", "calories"),
        ];
        let charts = [
            ("chart_speedTrend", "Speed Over Time"),
            ("chart_elevationProfile", "Elevation Profile"),
        ];

        let widgets = summaries
            .iter()
            .map(|(id, title, metric)| {
                WidgetConfig::new(id, title, SUMMARY, SUMMARY_MIN).with_metric(metric)
            })
            .chain(
                charts
                    .iter()
                    .map(|(id, title)| WidgetConfig::new(id, title, CHART, CHART_MIN)),
            )
            .map(|w| (w.id.clone(), w))
            .collect();
        Self { widgets }
    }

    /// Looks up a widget by id.
    pub fn get(&self, id: &str) -> Option<&WidgetConfig> {
        self.widgets.get(id)
    }

    /// Whether a widget with this id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.widgets.contains_key(id)
    }

    /// Widgets in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &WidgetConfig> {
        self.widgets.values()
    }

    /// Ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.widgets.keys().map(String::as_str)
    }

    /// Count of registered widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether no widgets are registered.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}
