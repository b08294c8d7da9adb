use std::collections::HashSet;
use std::fs;
use std::path::Path;

use pool_block_core::PoolSpec;
use serde::Deserialize;
use thiserror::Error;

/// Fragment priority used when an entry does not set one, matching the
/// conventional ordering slot for subnet pools in an assembled config.
pub const DEFAULT_PRIORITY: u32 = 70;

/// One named pool entry in a pools file.
#[derive(Debug, Clone, Deserialize)]
pub struct PoolEntry {
    /// Pool name, used in fragment file names. Letters, digits, `_`, `-`.
    pub name: String,
    /// Ordering priority within the assembled config; lower sorts first.
    #[serde(default = "default_priority")]
    pub priority: u32,
    /// The pool definition itself.
    #[serde(flatten)]
    pub spec: PoolSpec,
}

fn default_priority() -> u32 {
    DEFAULT_PRIORITY
}

#[derive(Debug, Deserialize)]
struct PoolsFile {
    #[serde(default)]
    pool: Vec<PoolEntry>,
}

/// Errors returned when loading a pools file.
#[derive(Debug, Error)]
pub enum PoolsLoadError {
    #[error("failed to read pools file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse pools file {path}: {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("failed to parse pools file {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("invalid pool name `{0}`; use letters, digits, `_` or `-`")]
    InvalidName(String),
    #[error("duplicate pool name `{0}`")]
    DuplicateName(String),
}

/// Load pool entries from a TOML pools file, or JSON when the path ends in
/// `.json`.
pub fn load_pools(path: &Path) -> Result<Vec<PoolEntry>, PoolsLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| PoolsLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let parsed: PoolsFile = if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&raw).map_err(|source| PoolsLoadError::Json {
            path: path.display().to_string(),
            source,
        })?
    } else {
        toml::from_str(&raw).map_err(|source| PoolsLoadError::Toml {
            path: path.display().to_string(),
            source,
        })?
    };

    check_names(&parsed.pool)?;
    Ok(parsed.pool)
}

fn check_names(entries: &[PoolEntry]) -> Result<(), PoolsLoadError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if entry.name.is_empty()
            || !entry
                .name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(PoolsLoadError::InvalidName(entry.name.clone()));
        }
        if !seen.insert(entry.name.as_str()) {
            return Err(PoolsLoadError::DuplicateName(entry.name.clone()));
        }
    }
    Ok(())
}
