pub mod common;
pub mod config;
pub mod error;
pub mod expansion;
pub mod groups;
pub mod selection;

#[cfg(test)]
mod testing;

pub use common::{initialize_logging, ItemId, LogOutput, VERSION};
pub use config::Config;
pub use error::{Result, TristateError, TristateExpectedError};
pub use expansion::{toolbar_label, ExpandIcon, ExpansionState};
pub use groups::{default_groups, visible_universe, GroupKind};
pub use selection::{forget, summarize, toggle_all, toggle_one, toggle_range, SelectionMap, SelectionState, Summary};

#[cfg(test)]
mod selection_test;
