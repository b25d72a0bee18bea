//! Validation and application of layouts reported back by the rendering
//! surface after a drag or resize.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::LayoutStore;
use crate::layout::{BreakpointId, LayoutError, LayoutItem};

/// How edits with overlapping items are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapPolicy {
    /// Accept overlapping items unchanged.
    #[default]
    Allow,
    /// Reject an edit in which any two items share a grid cell.
    Reject,
}

impl LayoutStore {
    /// Replaces one breakpoint's layout with an externally reported one.
    ///
    /// Each item's `min_w`/`min_h` is overwritten with the registry's
    /// minimum size before validation. The edit is rejected, and the store
    /// left untouched, when:
    /// - the breakpoint is not configured;
    /// - the item ids are not exactly the registry ids, each once;
    /// - an item is smaller than its minimum or extends past the last column;
    /// - items overlap and the policy is [`OverlapPolicy::Reject`].
    ///
    /// Layouts of all other breakpoints are never touched.
    pub fn apply_edit(
        &mut self,
        breakpoint: BreakpointId,
        mut items: Vec<LayoutItem>,
    ) -> Result<(), LayoutError> {
        let columns = self
            .breakpoints
            .columns(breakpoint)
            .ok_or(LayoutError::UnknownBreakpoint(breakpoint))?;

        self.check_ids(breakpoint, &items)?;

        for item in &mut items {
            // `check_ids` guarantees every id is registered.
            if let Some(widget) = self.registry.get(&item.id) {
                item.min_w = widget.min_size.w;
                item.min_h = widget.min_size.h;
            }
            check_item(breakpoint, columns, item)?;
        }

        if self.overlap_policy == OverlapPolicy::Reject {
            check_overlaps(breakpoint, &items)?;
        }

        tracing::debug!(
            breakpoint = %breakpoint,
            items = items.len(),
            "Applied layout edit"
        );
        self.layouts.insert(breakpoint, items);
        Ok(())
    }

    fn check_ids(&self, breakpoint: BreakpointId, items: &[LayoutItem]) -> Result<(), LayoutError> {
        let mut seen = HashSet::with_capacity(items.len());
        let mut duplicate = Vec::new();
        let mut unexpected = Vec::new();
        for item in items {
            if !self.registry.contains(&item.id) {
                if !unexpected.contains(&item.id) {
                    unexpected.push(item.id.clone());
                }
            } else if !seen.insert(item.id.as_str()) && !duplicate.contains(&item.id) {
                duplicate.push(item.id.clone());
            }
        }
        let missing: Vec<String> = self
            .registry
            .ids()
            .filter(|id| !seen.contains(id))
            .map(str::to_string)
            .collect();

        if missing.is_empty() && unexpected.is_empty() && duplicate.is_empty() {
            Ok(())
        } else {
            Err(LayoutError::IdMismatch {
                breakpoint,
                missing,
                unexpected,
                duplicate,
            })
        }
    }
}

fn check_item(breakpoint: BreakpointId, columns: u32, item: &LayoutItem) -> Result<(), LayoutError> {
    let reason = if item.w < item.min_w {
        format!("width {} is below the minimum {}", item.w, item.min_w)
    } else if item.h < item.min_h {
        format!("height {} is below the minimum {}", item.h, item.min_h)
    } else if item.right() > columns {
        format!(
            "spans columns {}..{} but the grid has {} columns",
            item.x,
            item.right(),
            columns
        )
    } else {
        return Ok(());
    };
    Err(LayoutError::InvalidItem {
        breakpoint,
        id: item.id.clone(),
        reason,
    })
}

fn check_overlaps(breakpoint: BreakpointId, items: &[LayoutItem]) -> Result<(), LayoutError> {
    for (i, first) in items.iter().enumerate() {
        if let Some(second) = items[i + 1..].iter().find(|other| first.overlaps(other)) {
            return Err(LayoutError::Overlap {
                breakpoint,
                first: first.id.clone(),
                second: second.id.clone(),
            });
        }
    }
    Ok(())
}
