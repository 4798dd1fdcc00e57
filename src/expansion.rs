//! The expansion module is the state an artist view keeps for its collapsible release groups: which
//! groups are expanded, which group was toggled last (the anchor for shift-click ranges), and the
//! icon and label of the "Expand All / Collapse All" toolbar button.
//!
//! Summaries are never cached here. The visible universe can change between renders, so callers
//! pass it in on every call.

use std::hash::Hash;

use tracing::debug;

use crate::common::ItemId;
use crate::config::Config;
use crate::selection::{summarize, toggle_all, toggle_one, toggle_range, SelectionMap, Summary};

/// Glyph for the expand-all toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandIcon {
    Collapse,
    Expand,
    Indeterminate,
}

impl ExpandIcon {
    pub fn from_summary(summary: &Summary) -> Self {
        if summary.all_selected {
            ExpandIcon::Collapse
        } else if summary.all_unselected {
            ExpandIcon::Expand
        } else {
            ExpandIcon::Indeterminate
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExpandIcon::Collapse => "collapse",
            ExpandIcon::Expand => "expand",
            ExpandIcon::Indeterminate => "expand-indeterminate",
        }
    }
}

pub fn toolbar_label(summary: &Summary) -> &'static str {
    if summary.all_selected {
        "Collapse All"
    } else {
        "Expand All"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionState<K: Eq + Hash = ItemId> {
    expanded: SelectionMap<K>,
    last_toggled: Option<K>,
}

impl<K: Eq + Hash> Default for ExpansionState<K> {
    fn default() -> Self {
        Self {
            expanded: SelectionMap::new(),
            last_toggled: None,
        }
    }
}

impl<K: Clone + Eq + Hash> ExpansionState<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(expanded: SelectionMap<K>) -> Self {
        Self {
            expanded,
            last_toggled: None,
        }
    }

    pub fn is_expanded(&self, id: &K) -> bool {
        self.expanded.get(id)
    }

    pub fn map(&self) -> &SelectionMap<K> {
        &self.expanded
    }

    pub fn into_map(self) -> SelectionMap<K> {
        self.expanded
    }

    pub fn last_toggled(&self) -> Option<&K> {
        self.last_toggled.as_ref()
    }

    pub fn summary(&self, universe: &[K]) -> Summary {
        summarize(universe, &self.expanded)
    }

    pub fn icon(&self, universe: &[K]) -> ExpandIcon {
        ExpandIcon::from_summary(&self.summary(universe))
    }

    pub fn label(&self, universe: &[K]) -> &'static str {
        toolbar_label(&self.summary(universe))
    }

    /// Collapse everything if everything is expanded, otherwise expand everything.
    pub fn expand_all_pressed(&mut self, universe: &[K]) -> Summary {
        let next_value = !self.summary(universe).all_selected;
        debug!("Expand all pressed over {} groups, expanding={}", universe.len(), next_value);
        self.expanded = toggle_all(universe, &self.expanded, next_value);
        self.last_toggled = None;
        self.summary(universe)
    }

    /// Set one group. With `shift` held, everything between the previously toggled group and this
    /// one follows.
    pub fn expand_pressed(&mut self, universe: &[K], id: K, is_expanded: bool, shift: bool) -> Summary {
        self.expanded = if shift {
            toggle_range(universe, &self.expanded, self.last_toggled.as_ref(), id.clone(), is_expanded)
        } else {
            toggle_one(&self.expanded, id.clone(), is_expanded)
        };
        self.last_toggled = Some(id);
        self.summary(universe)
    }
}

impl ExpansionState<ItemId> {
    /// Initial state for a view over the configured groups.
    pub fn from_config(config: &Config) -> Self {
        if config.expand_all_on_load {
            let universe = config.visible_universe();
            Self::from_map(toggle_all(&universe, &SelectionMap::new(), true))
        } else {
            Self::new()
        }
    }
}
