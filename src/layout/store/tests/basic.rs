//! Construction, snapshot and scenario tests for LayoutStore.

use super::{builtin_store, cards};
use crate::layout::{
    scaler, BreakpointId, BreakpointSpec, BreakpointTable, GridSize, LayoutError, LayoutStore,
    OverlapPolicy,
};
use crate::widgets::{WidgetConfig, WidgetRegistry};

fn placements(store: &LayoutStore, bp: BreakpointId) -> Vec<(u32, u32, u32, u32)> {
    store
        .layout(bp)
        .expect("breakpoint configured")
        .iter()
        .map(|i| (i.x, i.y, i.w, i.h))
        .collect()
}

#[test]
fn test_new_generates_every_configured_breakpoint() {
    let store = builtin_store();
    let snapshot = store.snapshot();
    let keys: Vec<BreakpointId> = snapshot.keys().copied().collect();
    assert_eq!(keys, BreakpointId::ALL.to_vec());
    for items in snapshot.values() {
        assert_eq!(items.len(), 10);
    }
}

#[test]
fn test_new_only_generates_configured_breakpoints() {
    let table = BreakpointTable::new(vec![
        BreakpointSpec::new(BreakpointId::Lg, 900, 12, 1.0),
        BreakpointSpec::new(BreakpointId::Xs, 0, 6, 0.5),
    ])
    .expect("valid table");
    let store = LayoutStore::new(cards(2, GridSize::new(4, 4)), table).expect("valid store");
    assert!(store.layout(BreakpointId::Md).is_none());
    assert_eq!(store.snapshot().len(), 2);
}

#[test]
fn test_new_rejects_min_width_wider_than_columns() {
    let widget = WidgetConfig::new(
        "summary_wide",
        "Wide",
        GridSize::new(4, 5),
        GridSize::new(5, 4),
    );
    let registry = WidgetRegistry::new(vec![widget]).expect("valid registry");
    let err = LayoutStore::new(registry, BreakpointTable::default()).expect_err("xxs has 4 columns");
    match err {
        LayoutError::InvalidWidget { id, reason } => {
            assert_eq!(id, "summary_wide");
            assert!(reason.contains("'xxs'"), "reason: {reason}");
        }
        other => panic!("expected InvalidWidget, got: {other:?}"),
    }
}

#[test]
fn test_scenario_three_cards_at_lg() {
    let store = LayoutStore::new(cards(3, GridSize::new(4, 5)), BreakpointTable::default())
        .expect("valid store");
    assert_eq!(
        placements(&store, BreakpointId::Lg),
        vec![(0, 0, 4, 5), (4, 0, 4, 5), (8, 0, 4, 5)]
    );
}

#[test]
fn test_scenario_three_cards_at_md() {
    let store = LayoutStore::new(cards(3, GridSize::new(4, 5)), BreakpointTable::default())
        .expect("valid store");
    assert_eq!(
        placements(&store, BreakpointId::Md),
        vec![(0, 0, 3, 4), (3, 0, 3, 4), (6, 0, 3, 4)]
    );
}

#[test]
fn test_scenario_fourth_card_wraps_at_md() {
    let store = LayoutStore::new(cards(4, GridSize::new(4, 5)), BreakpointTable::default())
        .expect("valid store");
    let md = placements(&store, BreakpointId::Md);
    assert_eq!(md[3], (0, 4, 3, 4));
}

#[test]
fn test_scenario_minimum_clamp_at_xxs() {
    let widget = WidgetConfig::new(
        "summary_clamped",
        "Clamped",
        GridSize::new(4, 5),
        GridSize::new(5, 4),
    );
    let table = BreakpointTable::default();
    let xxs = table.get(BreakpointId::Xxs).expect("xxs configured");
    assert_eq!(scaler::scale_by(widget.base_size, xxs.scale_factor()), GridSize::new(1, 2));
    assert_eq!(scaler::scale(&widget, xxs), GridSize::new(5, 4));
}

#[test]
fn test_minimum_clamp_inside_store() {
    let widget = WidgetConfig::new(
        "summary_clamped",
        "Clamped",
        GridSize::new(4, 5),
        GridSize::new(3, 4),
    );
    let registry = WidgetRegistry::new(vec![widget]).expect("valid registry");
    let store = LayoutStore::new(registry, BreakpointTable::default()).expect("valid store");
    assert_eq!(placements(&store, BreakpointId::Xxs), vec![(0, 0, 3, 4)]);
}

#[test]
fn test_snapshot_is_detached_from_store() {
    let store = builtin_store();
    let mut snapshot = store.snapshot();
    snapshot.clear();
    assert_eq!(store.snapshot().len(), 5);
}

#[test]
fn test_invariants_hold_for_builtin_layouts() {
    let store = builtin_store();
    for (bp, items) in store.snapshot() {
        let columns = store.breakpoints().columns(bp).expect("configured");
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        let expected: Vec<&str> = store.registry().ids().collect();
        assert_eq!(ids, expected);
        for item in &items {
            assert!(item.w >= item.min_w);
            assert!(item.h >= item.min_h);
            assert!(item.x + item.w <= columns);
        }
    }
}

#[test]
fn test_fresh_store_is_default_everywhere() {
    let store = builtin_store();
    for bp in BreakpointId::ALL {
        assert!(store.is_default(bp), "{bp} should be default");
    }
}

#[test]
fn test_is_default_false_for_unconfigured_breakpoint() {
    let table = BreakpointTable::new(vec![BreakpointSpec::new(BreakpointId::Lg, 0, 12, 1.0)])
        .expect("valid table");
    let store = LayoutStore::new(cards(1, GridSize::new(2, 2)), table).expect("valid store");
    assert!(!store.is_default(BreakpointId::Sm));
}

#[test]
fn test_default_overlap_policy_is_allow() {
    let store = builtin_store();
    assert_eq!(store.overlap_policy(), OverlapPolicy::Allow);
    let strict = store.with_overlap_policy(OverlapPolicy::Reject);
    assert_eq!(strict.overlap_policy(), OverlapPolicy::Reject);
}
