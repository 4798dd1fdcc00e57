//! The common module is our grab bag of shared toys: the identifier type that keys selection maps,
//! the crate version, and logging setup.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::sync::Mutex;

use directories::ProjectDirs;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt as tracing_fmt, EnvFilter};

use crate::error::{Result, TristateError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Identifier of a selectable item. Views key their groups either by name ("album", "ep") or by a
/// numeric database id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(i64),
    Str(String),
}

impl ItemId {
    /// Interpret an object key. Keys holding the canonical decimal form of an integer become
    /// `Int`, so `"7"` and `7` name the same item while `"07"` stays a string.
    pub fn from_key(key: &str) -> Self {
        match key.parse::<i64>() {
            Ok(n) if n.to_string() == key => ItemId::Int(n),
            _ => ItemId::Str(key.to_string()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ItemId::Str(s) => Some(s),
            ItemId::Int(_) => None,
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Int(n) => write!(f, "{n}"),
            ItemId::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Str(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId::Str(s)
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        ItemId::Int(n)
    }
}

impl From<i32> for ItemId {
    fn from(n: i32) -> Self {
        ItemId::Int(n.into())
    }
}

impl From<u32> for ItemId {
    fn from(n: u32) -> Self {
        ItemId::Int(n.into())
    }
}

struct ItemIdVisitor;

impl<'de> Visitor<'de> for ItemIdVisitor {
    type Value = ItemId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or integer item id")
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> std::result::Result<ItemId, E> {
        Ok(ItemId::Int(n))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> std::result::Result<ItemId, E> {
        i64::try_from(n)
            .map(ItemId::Int)
            .map_err(|_| E::custom(format!("item id {n} does not fit in i64")))
    }

    // Map keys always arrive as strings, so integer ids come back through `from_key`.
    fn visit_str<E: de::Error>(self, s: &str) -> std::result::Result<ItemId, E> {
        Ok(ItemId::from_key(s))
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ItemIdVisitor)
    }
}

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Stderr,
    File,
}

static LOGGING_INITIALIZED: Mutex<Option<HashSet<Option<String>>>> = Mutex::new(None);
// The file writer stops flushing once its guard drops, so it lives for the whole process.
static FILE_WRITER_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

pub fn initialize_logging(logger_name: Option<&str>, output: LogOutput) -> Result<()> {
    {
        let mut initialized = LOGGING_INITIALIZED
            .lock()
            .map_err(|_| TristateError::Generic("logging state lock poisoned".to_string()))?;
        let key = logger_name.map(|s| s.to_string());
        if !initialized.get_or_insert_with(HashSet::new).insert(key) {
            return Ok(());
        }
    }

    let log_despite_testing = std::env::var("LOG_TEST").is_ok();
    let is_testing = std::env::var("CARGO_TEST").is_ok();
    if is_testing && !log_despite_testing {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match output {
        LogOutput::Stderr => {
            let subscriber = tracing_fmt::Subscriber::builder()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(!log_despite_testing)
                .with_thread_ids(log_despite_testing)
                .with_line_number(log_despite_testing)
                .with_file(log_despite_testing)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| TristateError::Generic(format!("Failed to install logger: {e}")))?;
        }
        LogOutput::File => {
            let proj_dirs = ProjectDirs::from("", "", "tristate")
                .ok_or_else(|| TristateError::Generic("Failed to get project directories".to_string()))?;
            let log_dir = if cfg!(target_os = "macos") {
                proj_dirs.cache_dir()
            } else {
                proj_dirs.state_dir().unwrap_or(proj_dirs.cache_dir())
            };
            fs::create_dir_all(log_dir)?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix("tristate")
                .filename_suffix("log")
                .build(log_dir)
                .map_err(|e| TristateError::Generic(format!("Failed to open log file: {e}")))?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            if let Ok(mut slot) = FILE_WRITER_GUARD.lock() {
                *slot = Some(guard);
            }

            let subscriber = tracing_fmt::Subscriber::builder()
                .with_env_filter(env_filter)
                .with_writer(non_blocking)
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(true)
                .with_file(true)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| TristateError::Generic(format!("Failed to install logger: {e}")))?;
        }
    }

    Ok(())
}
