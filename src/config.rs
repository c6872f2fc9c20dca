use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::store::StatusMode;

const DATA_DIR_VAR: &str = "BUDGIE_DATA_DIR";
const STATUS_MODE_VAR: &str = "BUDGIE_STATUS_MODE";
const DB_FILE: &str = "budgie.db";

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Config {
    pub(crate) data_dir: PathBuf,
    pub(crate) status_mode: StatusMode,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_dir = match lookup(DATA_DIR_VAR).filter(|v| !v.trim().is_empty()) {
            Some(dir) => PathBuf::from(crate::run::shellexpand(dir.trim())),
            None => default_data_dir()?,
        };

        let status_mode = match lookup(STATUS_MODE_VAR).filter(|v| !v.trim().is_empty()) {
            Some(raw) => StatusMode::parse(&raw).ok_or_else(|| {
                anyhow::anyhow!("{STATUS_MODE_VAR} must be 'live' or 'stored', got '{raw}'")
            })?,
            None => StatusMode::default(),
        };

        Ok(Self {
            data_dir,
            status_mode,
        })
    }

    /// Database path, creating the data directory if needed.
    pub(crate) fn db_path(&self) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.data_dir).with_context(|| {
            format!(
                "Failed to create data directory: {}",
                self.data_dir.display()
            )
        })?;
        Ok(self.data_dir.join(DB_FILE))
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "budgie", "Budgie")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}
