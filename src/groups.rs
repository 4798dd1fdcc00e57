//! The groups module describes the collapsible groups an artist view is split into (one per release
//! type), and derives the universe of identifiers that expand/collapse operations act on.

use once_cell::sync::Lazy;

use crate::common::ItemId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupKind {
    pub name: String,
    pub label: String,
    pub visible: bool,
}

impl GroupKind {
    pub fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            visible: true,
        }
    }

    pub fn id(&self) -> ItemId {
        ItemId::Str(self.name.clone())
    }
}

static DEFAULT_GROUPS: Lazy<Vec<GroupKind>> = Lazy::new(|| {
    vec![
        GroupKind::new("album", "Album"),
        GroupKind::new("ep", "EP"),
        GroupKind::new("single", "Single"),
        GroupKind::new("broadcast", "Broadcast"),
        GroupKind::new("other", "Other"),
    ]
});

/// Release-type groups shown when the config does not override them.
pub fn default_groups() -> Vec<GroupKind> {
    DEFAULT_GROUPS.clone()
}

/// Identifiers of the visible groups, in catalog order.
pub fn visible_universe(groups: &[GroupKind]) -> Vec<ItemId> {
    groups.iter().filter(|g| g.visible).map(GroupKind::id).collect()
}
