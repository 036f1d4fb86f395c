//! Save-file persistence for the roster.
//!
//! The file is JSON with one flat object per record. Unknown keys are ignored
//! and missing keys take the record defaults, so older saves keep loading.

use crate::errors::{SaveDataError, SaveDataResult};
use crate::roster::Roster;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    #[serde(default, alias = "bag")]
    pub roster: Roster,
}

impl SaveData {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }

    pub fn from_json(text: &str) -> SaveDataResult<Self> {
        let mut data: SaveData = serde_json::from_str(text)?;
        data.roster = data.roster.normalized();
        Ok(data)
    }

    pub fn to_json(&self) -> SaveDataResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> SaveDataResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| SaveDataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data = Self::from_json(&text)?;
        tracing::info!(
            "Loaded save {} ({} creatures, {} items)",
            path.display(),
            data.roster.creatures.len(),
            data.roster.items.len()
        );
        Ok(data)
    }

    pub fn store(&self, path: &Path) -> SaveDataResult<()> {
        let text = self.to_json()?;
        fs::write(path, text).map_err(|source| SaveDataError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
