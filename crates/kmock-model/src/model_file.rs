//! On-disk form of the symbol model.
//!
//! A host adapter dumps what it resolved in each processing round as one
//! entry of `rounds`. Later rounds typically re-supply targets that were
//! deferred earlier, now fully resolved.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::target::TargetType;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read model file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed model file {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelFile {
    #[serde(default)]
    pub rounds: Vec<Vec<TargetType>>,
}

impl ModelFile {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: display.clone(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ModelError::Parse {
            path: display,
            source,
        })
    }

    pub fn target_count(&self) -> usize {
        self.rounds.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
#[path = "../tests/model_file.rs"]
mod tests;
