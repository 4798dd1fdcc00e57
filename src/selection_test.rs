use crate::common::ItemId;
use crate::selection::*;

fn ids(names: &[&str]) -> Vec<ItemId> {
    names.iter().map(|n| ItemId::from(*n)).collect()
}

fn map_of(pairs: &[(&str, bool)]) -> SelectionMap {
    pairs.iter().map(|(k, v)| (ItemId::from(*k), *v)).collect()
}

#[test]
fn test_toggle_all_then_summarize() {
    let _ = crate::testing::init();
    let universe = ids(&["album", "ep", "single", "broadcast"]);
    let start = map_of(&[("ep", true), ("other", false)]);

    for next_value in [true, false] {
        let result = toggle_all(&universe, &start, next_value);
        let summary = summarize(&universe, &result);
        assert_eq!(summary.all_selected, next_value);
        assert_eq!(summary.all_unselected, !next_value);
    }
}

#[test]
fn test_toggle_all_leaves_outside_keys() {
    let universe = ids(&["album", "ep"]);
    let start = map_of(&[("other", true), ("broadcast", false)]);

    let result = toggle_all(&universe, &start, false);
    assert_eq!(result.len(), 4);
    assert!(result.get(&ItemId::from("other")));
    assert!(result.contains(&ItemId::from("broadcast")));
    assert!(!result.get(&ItemId::from("broadcast")));
}

#[test]
fn test_toggle_all_empty_universe_is_identity() {
    let start = map_of(&[("album", true), ("ep", false)]);
    assert_eq!(toggle_all(&[], &start, true), start);
    assert_eq!(toggle_all(&[], &start, false), start);
}

#[test]
fn test_toggle_all_idempotent() {
    let universe = ids(&["album", "ep", "single"]);
    let start = map_of(&[("ep", false)]);
    let once = toggle_all(&universe, &start, true);
    let twice = toggle_all(&universe, &once, true);
    assert_eq!(once, twice);
}

#[test]
fn test_toggle_all_does_not_mutate_input() {
    let universe = ids(&["album"]);
    let start = SelectionMap::new();
    let _ = toggle_all(&universe, &start, true);
    assert!(start.is_empty());
}

#[test]
fn test_toggle_one_changes_exactly_one_key() {
    let start = map_of(&[("album", true), ("ep", false), ("single", true)]);
    let result = toggle_one(&start, ItemId::from("single"), false);

    assert_eq!(result.len(), start.len());
    for (id, value) in &start {
        if id == &ItemId::from("single") {
            assert!(!result.get(id));
        } else {
            assert_eq!(result.get(id), *value);
        }
    }
}

#[test]
fn test_toggle_one_inserts_unknown() {
    let start = map_of(&[("album", true)]);
    let result = toggle_one(&start, ItemId::from(12), true);
    assert_eq!(result.len(), 2);
    assert!(result.get(&ItemId::Int(12)));
}

#[test]
fn test_summarize_mixed_state() {
    let universe = ids(&["a", "b", "c"]);
    let map = map_of(&[("a", true), ("b", false)]);
    let summary = summarize(&universe, &map);
    assert!(!summary.all_selected);
    assert!(!summary.all_unselected);
    assert_eq!(summary.state(), SelectionState::Partial);
}

#[test]
fn test_summarize_absent_counts_as_unselected() {
    let universe = ids(&["a", "b"]);
    let map = map_of(&[("a", false)]);
    let summary = summarize(&universe, &map);
    assert!(!summary.all_selected);
    assert!(summary.all_unselected);
}

#[test]
fn test_summarize_ignores_keys_outside_universe() {
    let universe = ids(&["a"]);
    let map = map_of(&[("a", true), ("z", false)]);
    assert_eq!(summarize(&universe, &map).state(), SelectionState::AllSelected);
}

#[test]
fn test_summarize_empty_universe() {
    let summary = summarize::<ItemId>(&[], &SelectionMap::new());
    assert!(!summary.all_selected);
    assert!(summary.all_unselected);

    // Still holds when the map has selected entries.
    let summary = summarize(&[], &map_of(&[("album", true)]));
    assert_eq!(summary.state(), SelectionState::AllUnselected);
}

#[test]
fn test_album_ep_single_scenario() {
    let universe = ids(&["album", "ep", "single"]);

    let expanded = toggle_all(&universe, &SelectionMap::new(), true);
    assert_eq!(expanded, map_of(&[("album", true), ("ep", true), ("single", true)]));
    assert_eq!(
        summarize(&universe, &expanded),
        Summary {
            all_selected: true,
            all_unselected: false
        }
    );

    let one_collapsed = toggle_one(&expanded, ItemId::from("ep"), false);
    assert_eq!(one_collapsed, map_of(&[("album", true), ("ep", false), ("single", true)]));
    assert_eq!(
        summarize(&universe, &one_collapsed),
        Summary {
            all_selected: false,
            all_unselected: false
        }
    );
}

#[test]
fn test_toggle_range_forward_and_backward() {
    let universe = ids(&["album", "ep", "single", "broadcast", "other"]);

    let forward = toggle_range(&universe, &SelectionMap::new(), Some(&ItemId::from("ep")), ItemId::from("broadcast"), true);
    assert_eq!(forward, map_of(&[("ep", true), ("single", true), ("broadcast", true)]));

    let backward = toggle_range(&universe, &SelectionMap::new(), Some(&ItemId::from("other")), ItemId::from("single"), true);
    assert_eq!(backward, map_of(&[("single", true), ("broadcast", true), ("other", true)]));
}

#[test]
fn test_toggle_range_without_usable_anchor() {
    let universe = ids(&["album", "ep", "single"]);
    let start = map_of(&[("album", true)]);

    let no_anchor = toggle_range(&universe, &start, None, ItemId::from("single"), true);
    assert_eq!(no_anchor, toggle_one(&start, ItemId::from("single"), true));

    let stale_anchor = toggle_range(&universe, &start, Some(&ItemId::from("gone")), ItemId::from("single"), true);
    assert_eq!(stale_anchor, toggle_one(&start, ItemId::from("single"), true));

    // Target outside the universe is still set, but no range is filled.
    let outside = toggle_range(&universe, &start, Some(&ItemId::from("album")), ItemId::from("other"), false);
    assert_eq!(outside, map_of(&[("album", true), ("other", false)]));
}

#[test]
fn test_toggle_range_same_item() {
    let universe = ids(&["album", "ep"]);
    let result = toggle_range(&universe, &SelectionMap::new(), Some(&ItemId::from("ep")), ItemId::from("ep"), true);
    assert_eq!(result, map_of(&[("ep", true)]));
}

#[test]
fn test_forget() {
    let start = map_of(&[("album", true), ("ep", true)]);
    let result = forget(&start, &ItemId::from("album"));
    assert!(!result.contains(&ItemId::from("album")));
    assert!(!result.get(&ItemId::from("album")));
    assert!(result.get(&ItemId::from("ep")));
    // Forgetting an unknown key is a no-op.
    assert_eq!(forget(&result, &ItemId::from("nope")), result);
}

#[test]
fn test_snapshot_json() {
    let map = SelectionMap::from_snapshot_json(r#"{"album": true, "7": false, "07": true}"#).unwrap();
    assert_eq!(map.len(), 3);
    assert!(map.get(&ItemId::from("album")));
    assert!(map.contains(&ItemId::Int(7)));
    assert!(map.get(&ItemId::from("07")));
}

#[test]
fn test_snapshot_json_invalid() {
    let result = SelectionMap::from_snapshot_json(r#"{"album": "yes"}"#);
    match result {
        Err(crate::error::TristateError::Expected(crate::error::TristateExpectedError::InvalidSnapshot { .. })) => {}
        other => panic!("Expected InvalidSnapshot error, got {other:?}"),
    }
}

#[test]
fn test_generic_keys() {
    let universe = [1u32, 2, 3];
    let map = toggle_one(&SelectionMap::new(), 2u32, true);
    assert!(summarize(&universe, &map).is_partial());
    let map = toggle_all(&universe, &map, true);
    assert_eq!(summarize(&universe, &map).state(), SelectionState::AllSelected);
}

#[test]
fn test_serde_round_trip_keeps_integer_keys() {
    let map = toggle_one(&SelectionMap::new(), ItemId::Int(7), true);
    let map = toggle_one(&map, ItemId::from("07"), false);
    let map = toggle_one(&map, ItemId::from("album"), true);

    let json = serde_json::to_string(&map).unwrap();
    let back: SelectionMap = serde_json::from_str(&json).unwrap();
    assert_eq!(back, map);
    assert!(back.get(&ItemId::Int(7)));
    assert_eq!(back, SelectionMap::from_snapshot_json(&json).unwrap());
}
