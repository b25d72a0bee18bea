//! Grid-unit value types shared by the scaler, packer and store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::layout::BreakpointId;

/// Width and height in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    /// Width in columns.
    pub w: u32,
    /// Height in rows.
    pub h: u32,
}

impl GridSize {
    /// Largest width or height accepted from configuration.
    pub const MAX_UNITS: u32 = 10_000;

    /// Creates a size from width and height.
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// Raises each dimension to at least the matching dimension of `min`.
    pub fn clamp_min(self, min: GridSize) -> Self {
        Self {
            w: self.w.max(min.w),
            h: self.h.max(min.h),
        }
    }

    /// Whether either dimension is above [`GridSize::MAX_UNITS`].
    pub fn exceeds_limit(self) -> bool {
        self.w > Self::MAX_UNITS || self.h > Self::MAX_UNITS
    }
}

/// Placement of one widget at one breakpoint.
///
/// Serialized with the field names the rendering surface expects:
/// `{"i": ..., "x": ..., "y": ..., "w": ..., "h": ..., "minW": ..., "minH": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutItem {
    /// Widget identifier.
    #[serde(rename = "i")]
    pub id: String,
    /// Column of the left edge.
    pub x: u32,
    /// Row of the top edge.
    pub y: u32,
    /// Width in columns.
    pub w: u32,
    /// Height in rows.
    pub h: u32,
    /// Minimum width the surface may resize to.
    #[serde(default)]
    pub min_w: u32,
    /// Minimum height the surface may resize to.
    #[serde(default)]
    pub min_h: u32,
}

impl LayoutItem {
    /// Size of the item.
    pub fn size(&self) -> GridSize {
        GridSize::new(self.w, self.h)
    }

    /// Column just past the right edge.
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    /// Row just past the bottom edge.
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    /// Whether the two items share at least one grid cell.
    pub fn overlaps(&self, other: &LayoutItem) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Per-breakpoint layouts, widest breakpoint first.
pub type Layouts = BTreeMap<BreakpointId, Vec<LayoutItem>>;

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, x: u32, y: u32, w: u32, h: u32) -> LayoutItem {
        LayoutItem {
            id: id.to_string(),
            x,
            y,
            w,
            h,
            min_w: 1,
            min_h: 1,
        }
    }

    #[test]
    fn clamp_min_raises_each_dimension_independently() {
        let size = GridSize::new(1, 6).clamp_min(GridSize::new(3, 2));
        assert_eq!(size, GridSize::new(3, 6));
    }

    #[test]
    fn size_limit_applies_to_either_dimension() {
        assert!(!GridSize::new(GridSize::MAX_UNITS, GridSize::MAX_UNITS).exceeds_limit());
        assert!(GridSize::new(GridSize::MAX_UNITS + 1, 1).exceeds_limit());
        assert!(GridSize::new(12, 3_000_000_000).exceeds_limit());
    }

    #[test]
    fn layout_item_uses_surface_field_names() {
        let json = serde_json::to_value(item("summary_calories", 4, 0, 4, 5))
            .expect("serialize");
        assert_eq!(json["i"], "summary_calories");
        assert_eq!(json["minW"], 1);
        assert_eq!(json["minH"], 1);
        assert!(json.get("id").is_none());
        assert!(json.get("min_w").is_none());
    }

    #[test]
    fn layout_item_min_fields_default_when_absent() {
        let parsed: LayoutItem =
            serde_json::from_str(r#"{"i":"a","x":0,"y":0,"w":2,"h":2}"#).expect("parse");
        assert_eq!(parsed.min_w, 0);
        assert_eq!(parsed.min_h, 0);
    }

    #[test]
    fn negative_coordinates_are_rejected_on_parse() {
        let result: Result<LayoutItem, _> =
            serde_json::from_str(r#"{"i":"a","x":-1,"y":0,"w":2,"h":2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn overlap_detection() {
        let a = item("a", 0, 0, 4, 4);
        assert!(a.overlaps(&item("b", 3, 3, 2, 2)));
        assert!(!a.overlaps(&item("c", 4, 0, 2, 2)));
        assert!(!a.overlaps(&item("d", 0, 4, 2, 2)));
    }

    #[test]
    fn layouts_serialize_with_breakpoint_keys() {
        let mut layouts = Layouts::new();
        layouts.insert(BreakpointId::Md, vec![item("a", 0, 0, 1, 1)]);
        let json = serde_json::to_value(&layouts).expect("serialize");
        assert!(json.get("md").is_some());
    }
}
