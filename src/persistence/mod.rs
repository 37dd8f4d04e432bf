//! Save/load persistence
//!
//! Saves are a flat JSON object of string keys to arbitrary values, written
//! pretty-printed to a single file.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::Result;

/// Key-value save contents
pub type SaveData = Map<String, Value>;

/// A save file location
#[derive(Debug, Clone)]
pub struct SaveSystem {
    path: PathBuf,
}

impl SaveSystem {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `data`, creating parent directories as needed
    pub fn save(&self, data: &SaveData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(data)?)?;
        log::info!("Saved {} keys to {}", data.len(), self.path.display());
        Ok(())
    }

    /// Read the save file; a missing file is an empty save
    pub fn load(&self) -> Result<SaveData> {
        if !self.path.exists() {
            log::info!("No save at {}, starting fresh", self.path.display());
            return Ok(SaveData::new());
        }
        let json = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
