//! File-system output.
//!
//! Units land at `<root>/<package path>/<Name>.kt`. Alongside them,
//! `kmock-deps.json` records which source file each unit was generated from,
//! so a build tool can regenerate only what a change invalidates:
//!
//! ```json
//! {
//!   "units": [
//!     { "unit": "com.example.StoreMock", "path": "com/example/StoreMock.kt", "origin": "src/Store.kt" },
//!     { "unit": "dev.kmock.runtime.Mock01", "path": "dev/kmock/runtime/Mock01.kt", "origin": null }
//!   ]
//! }
//! ```

use indexmap::IndexMap;
use kmock_emitter::{Dependency, GeneratedUnit, OutputSink};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;

pub const MANIFEST_FILE_NAME: &str = "kmock-deps.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub unit: String,
    /// Relative to the output root, always `/`-separated.
    pub path: String,
    /// `None` for session-scoped units.
    pub origin: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyManifest {
    pub units: Vec<ManifestEntry>,
}

pub struct DirectorySink {
    root: PathBuf,
    entries: IndexMap<String, ManifestEntry>,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirectorySink {
            root: root.into(),
            entries: IndexMap::new(),
        }
    }

    pub fn manifest(&self) -> DependencyManifest {
        DependencyManifest {
            units: self.entries.values().cloned().collect(),
        }
    }

    /// Write `kmock-deps.json` and return its path.
    pub fn finish(&self) -> io::Result<PathBuf> {
        std::fs::create_dir_all(&self.root)?;
        let path = self.root.join(MANIFEST_FILE_NAME);
        let json = serde_json::to_string_pretty(&self.manifest()).map_err(io::Error::other)?;
        std::fs::write(&path, json + "\n")?;
        Ok(path)
    }
}

/// `com/example/StoreMock.kt` for `com.example.StoreMock`.
pub fn relative_path(unit: &GeneratedUnit) -> String {
    let file = format!("{}.kt", unit.name);
    if unit.package.is_empty() {
        file
    } else {
        format!("{}/{file}", unit.package.replace('.', "/"))
    }
}

impl OutputSink for DirectorySink {
    fn write_unit(&mut self, unit: &GeneratedUnit) -> io::Result<()> {
        let relative = relative_path(unit);
        let path = self.root.join(&relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, &unit.text)?;
        tracing::trace!(path = %path.display(), "wrote unit");

        let origin = match &unit.dependency {
            Dependency::Origin(file) => Some(file.clone()),
            Dependency::Session => None,
        };
        let qualified = unit.qualified_name();
        self.entries.insert(
            qualified.clone(),
            ManifestEntry {
                unit: qualified,
                path: relative,
                origin,
            },
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/directory_sink.rs"]
mod tests;
