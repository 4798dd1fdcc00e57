//! The config module defines the configuration file format and its parsing logic.
//!
//! Invalid configuration is reported with the offending key and file path, and unrecognized keys
//! produce a warning instead of an error.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, warn};

use crate::common::ItemId;
use crate::error::{Result, TristateError, TristateExpectedError};
use crate::groups::{default_groups, visible_universe, GroupKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Start views with every visible group expanded.
    pub expand_all_on_load: bool,
    pub groups: Vec<GroupKind>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expand_all_on_load: false,
            groups: default_groups(),
        }
    }
}

/// `<user config dir>/tristate/config.toml`.
pub fn default_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "tristate")
        .ok_or_else(|| TristateError::Generic("Failed to get project directories".to_string()))?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn invalid(key: &str, cfgpath: &Path, message: impl Into<String>) -> TristateError {
    TristateExpectedError::InvalidConfigValue {
        key: key.to_string(),
        path: cfgpath.to_path_buf(),
        message: message.into(),
    }
    .into()
}

impl Config {
    /// Read and parse the config file at `config_path_override`, or at the default location.
    pub fn parse(config_path_override: Option<&Path>) -> Result<Self> {
        let cfgpath = match config_path_override {
            Some(p) => PathBuf::from(shellexpand::tilde(&p.to_string_lossy()).as_ref()),
            None => default_config_path()?,
        };
        debug!("Loading configuration from {}", cfgpath.display());

        let cfgtext = match std::fs::read_to_string(&cfgpath) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TristateExpectedError::ConfigNotFound { path: cfgpath }.into());
            }
            Err(e) => return Err(e.into()),
        };
        Self::parse_str(&cfgtext, &cfgpath)
    }

    /// Parse configuration text. `cfgpath` is only used for error messages.
    pub fn parse_str(cfgtext: &str, cfgpath: &Path) -> Result<Self> {
        let mut data: toml::Table = toml::from_str(cfgtext).map_err(|e| TristateExpectedError::ConfigDecode {
            path: cfgpath.to_path_buf(),
            message: e.to_string(),
        })?;

        let expand_all_on_load = match data.remove("expand_all_on_load") {
            None => false,
            Some(toml::Value::Boolean(b)) => b,
            Some(other) => {
                return Err(invalid(
                    "expand_all_on_load",
                    cfgpath,
                    format!("Must be a bool: got {}", other.type_str()),
                ))
            }
        };

        let groups = match data.remove("groups") {
            None => default_groups(),
            Some(toml::Value::Array(entries)) => parse_groups(entries, cfgpath)?,
            Some(other) => {
                return Err(invalid(
                    "groups",
                    cfgpath,
                    format!("Must be an array of tables: got {}", other.type_str()),
                ))
            }
        };

        for key in data.keys() {
            warn!("Unrecognized option in configuration file: {}", key);
        }

        Ok(Self {
            expand_all_on_load,
            groups,
        })
    }

    pub fn visible_universe(&self) -> Vec<ItemId> {
        visible_universe(&self.groups)
    }
}

fn parse_groups(entries: Vec<toml::Value>, cfgpath: &Path) -> Result<Vec<GroupKind>> {
    let mut seen = HashSet::new();
    let mut groups = Vec::with_capacity(entries.len());

    for (i, entry) in entries.into_iter().enumerate() {
        let mut table = match entry {
            toml::Value::Table(t) => t,
            other => {
                return Err(invalid(
                    &format!("groups[{i}]"),
                    cfgpath,
                    format!("Each group must be a table: got {}", other.type_str()),
                ))
            }
        };

        let name = match table.remove("name") {
            Some(toml::Value::String(s)) if !s.is_empty() => s,
            Some(toml::Value::String(_)) => {
                return Err(invalid(&format!("groups[{i}].name"), cfgpath, "Must be a non-empty string"));
            }
            Some(other) => {
                return Err(invalid(
                    &format!("groups[{i}].name"),
                    cfgpath,
                    format!("Must be a string: got {}", other.type_str()),
                ))
            }
            None => {
                return Err(TristateExpectedError::MissingConfigKey {
                    key: format!("groups[{i}].name"),
                    path: cfgpath.to_path_buf(),
                }
                .into())
            }
        };
        if !seen.insert(name.clone()) {
            return Err(invalid(
                &format!("groups[{i}].name"),
                cfgpath,
                format!("Duplicate group name: {name}"),
            ));
        }

        let label = match table.remove("label") {
            None => name.clone(),
            Some(toml::Value::String(s)) => s,
            Some(other) => {
                return Err(invalid(
                    &format!("groups[{i}].label"),
                    cfgpath,
                    format!("Must be a string: got {}", other.type_str()),
                ))
            }
        };

        let visible = match table.remove("visible") {
            None => true,
            Some(toml::Value::Boolean(b)) => b,
            Some(other) => {
                return Err(invalid(
                    &format!("groups[{i}].visible"),
                    cfgpath,
                    format!("Must be a bool: got {}", other.type_str()),
                ))
            }
        };

        for key in table.keys() {
            warn!("Unrecognized option in configuration file: groups[{}].{}", i, key);
        }

        groups.push(GroupKind { name, label, visible });
    }

    Ok(groups)
}
