//! Pixel geometry of the grid, for rendering surfaces that position boxes
//! absolutely.

use serde::{Deserialize, Serialize};

use crate::layout::LayoutItem;

/// Pixel parameters of the grid container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridGeometry {
    /// Height of one grid row in pixels.
    pub row_height: u32,
    /// Horizontal and vertical gap between items in pixels.
    pub margin: [u32; 2],
    /// Horizontal and vertical padding inside the container in pixels.
    pub container_padding: [u32; 2],
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            row_height: 20,
            margin: [5, 5],
            container_padding: [0, 0],
        }
    }
}

/// Pixel rectangle of one item inside the container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    /// Widget identifier.
    pub id: String,
    /// Left offset.
    pub left: u32,
    /// Top offset.
    pub top: u32,
    /// Box width.
    pub width: u32,
    /// Box height.
    pub height: u32,
}

impl GridGeometry {
    /// Width of one column for a container of `container_width` pixels.
    ///
    /// Never negative: a container too narrow for its margins yields zero.
    pub fn column_width(&self, container_width: u32, columns: u32) -> f64 {
        if columns == 0 {
            return 0.0;
        }
        let gaps = f64::from(self.margin[0]) * f64::from(columns - 1);
        let padding = f64::from(self.container_padding[0]) * 2.0;
        ((f64::from(container_width) - gaps - padding) / f64::from(columns)).max(0.0)
    }

    /// Pixel rectangle of `item` in a container of the given width.
    pub fn item_rect(&self, item: &LayoutItem, container_width: u32, columns: u32) -> PixelRect {
        let col_width = self.column_width(container_width, columns);
        let row_height = f64::from(self.row_height);
        let [margin_x, margin_y] = self.margin.map(f64::from);
        let [pad_x, pad_y] = self.container_padding.map(f64::from);

        PixelRect {
            id: item.id.clone(),
            left: to_px((col_width + margin_x) * f64::from(item.x) + pad_x),
            top: to_px((row_height + margin_y) * f64::from(item.y) + pad_y),
            width: to_px(col_width * f64::from(item.w) + gap_total(item.w, margin_x)),
            height: to_px(row_height * f64::from(item.h) + gap_total(item.h, margin_y)),
        }
    }
}

/// Total gap spanned inside an item covering `cells` cells.
fn gap_total(cells: u32, margin: f64) -> f64 {
    f64::from(cells.saturating_sub(1)) * margin
}

fn to_px(value: f64) -> u32 {
    value.round().max(0.0) as u32
}
