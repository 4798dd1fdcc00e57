//! The selection module tracks which items of a flat set are selected (or expanded), and answers
//! whether all, none, or some of a given universe of items are selected.
//!
//! Every operation is a pure function: it takes the caller's current map and returns the next one.
//! The caller owns the map and decides when to replace its stored copy. An item that is absent from
//! the map counts as unselected.

use std::collections::hash_map;
use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::ItemId;
use crate::error::{Result, TristateExpectedError};

/// Per-item boolean state. Keys are only ever added by toggles; nothing in this module removes a
/// key unless the caller asks for it via [`forget`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "K: Serialize + Eq + Hash",
    deserialize = "K: Deserialize<'de> + Eq + Hash"
))]
pub struct SelectionMap<K: Eq + Hash = ItemId> {
    values: HashMap<K, bool>,
}

impl<K: Eq + Hash> Default for SelectionMap<K> {
    fn default() -> Self {
        Self { values: HashMap::new() }
    }
}

impl<K: Eq + Hash> SelectionMap<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolved value for `id`: absent items are unselected.
    pub fn get(&self, id: &K) -> bool {
        self.values.get(id).copied().unwrap_or(false)
    }

    /// Whether `id` has an explicit value, as opposed to defaulting to unselected.
    pub fn contains(&self, id: &K) -> bool {
        self.values.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, K, bool> {
        self.values.iter()
    }
}

impl SelectionMap<ItemId> {
    /// Restore a map from the JSON object a view layer keeps, e.g. `{"album": true, "12": false}`.
    /// Integer-looking keys become [`ItemId::Int`].
    pub fn from_snapshot_json(json: &str) -> Result<Self> {
        let map: Self = serde_json::from_str(json).map_err(|e| TristateExpectedError::InvalidSnapshot {
            message: e.to_string(),
        })?;
        Ok(map)
    }
}

impl<K: Eq + Hash> FromIterator<(K, bool)> for SelectionMap<K> {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash> From<HashMap<K, bool>> for SelectionMap<K> {
    fn from(values: HashMap<K, bool>) -> Self {
        Self { values }
    }
}

impl<K: Eq + Hash> IntoIterator for SelectionMap<K> {
    type Item = (K, bool);
    type IntoIter = hash_map::IntoIter<K, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, K: Eq + Hash> IntoIterator for &'a SelectionMap<K> {
    type Item = (&'a K, &'a bool);
    type IntoIter = hash_map::Iter<'a, K, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Aggregate state of a universe. Both flags false means a partial selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub all_selected: bool,
    pub all_unselected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    AllSelected,
    AllUnselected,
    Partial,
}

impl Summary {
    pub fn state(&self) -> SelectionState {
        if self.all_selected {
            SelectionState::AllSelected
        } else if self.all_unselected {
            SelectionState::AllUnselected
        } else {
            SelectionState::Partial
        }
    }

    pub fn is_partial(&self) -> bool {
        !self.all_selected && !self.all_unselected
    }
}

/// Set every item of `universe` to `next_value`. Keys outside the universe are left alone.
pub fn toggle_all<K: Clone + Eq + Hash>(universe: &[K], current: &SelectionMap<K>, next_value: bool) -> SelectionMap<K> {
    let mut next = current.clone();
    for id in universe {
        next.values.insert(id.clone(), next_value);
    }
    debug!("Set {} of {} tracked items to {}", universe.len(), next.len(), next_value);
    next
}

/// Set a single item, inserting it if it was not tracked yet.
pub fn toggle_one<K: Clone + Eq + Hash>(current: &SelectionMap<K>, id: K, next_value: bool) -> SelectionMap<K> {
    let mut next = current.clone();
    next.values.insert(id, next_value);
    next
}

/// Set `id`, and when `anchor` is given and both items are in `universe`, every item between the
/// two (inclusive, in universe order). Without a usable anchor this is [`toggle_one`].
pub fn toggle_range<K: Clone + Eq + Hash>(
    universe: &[K],
    current: &SelectionMap<K>,
    anchor: Option<&K>,
    id: K,
    next_value: bool,
) -> SelectionMap<K> {
    let span = anchor.and_then(|anchor| {
        let from = universe.iter().position(|x| x == anchor)?;
        let to = universe.iter().position(|x| *x == id)?;
        Some((from.min(to), from.max(to)))
    });

    let mut next = toggle_one(current, id, next_value);
    if let Some((lower, upper)) = span {
        debug!("Range toggle over universe positions {}..={} to {}", lower, upper, next_value);
        for item in &universe[lower..=upper] {
            next.values.insert(item.clone(), next_value);
        }
    }
    next
}

/// Drop the explicit value for `id`, so it falls back to unselected.
pub fn forget<K: Clone + Eq + Hash>(current: &SelectionMap<K>, id: &K) -> SelectionMap<K> {
    let mut next = current.clone();
    next.values.remove(id);
    next
}

/// Summarize `universe` against `map` in a single pass.
///
/// An empty universe is reported as all unselected and not all selected: with nothing to expand,
/// collapsed is the resting state.
pub fn summarize<K: Eq + Hash>(universe: &[K], map: &SelectionMap<K>) -> Summary {
    if universe.is_empty() {
        return Summary {
            all_selected: false,
            all_unselected: true,
        };
    }

    let mut summary = Summary {
        all_selected: true,
        all_unselected: true,
    };
    for id in universe {
        if map.get(id) {
            summary.all_unselected = false;
        } else {
            summary.all_selected = false;
        }
        if summary.is_partial() {
            break;
        }
    }
    summary
}
