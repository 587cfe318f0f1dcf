//! Generator configuration.
//!
//! Loaded from an optional `kmock.json`; every field has a default so an
//! empty object is a valid configuration.
//!
//! ```json
//! {
//!   "runtimePackage": "dev.kmock.runtime",
//!   "markerAnnotation": "dev.kmock.runtime.Mocked",
//!   "mockSuffix": "Mock",
//!   "indentWidth": 4
//! }
//! ```

use serde::{Deserialize, Serialize};

pub const DEFAULT_RUNTIME_PACKAGE: &str = "dev.kmock.runtime";
pub const DEFAULT_MARKER_ANNOTATION: &str = "dev.kmock.runtime.Mocked";

/// Inspections silenced on every generated mock class. The generated code
/// casts through erased stub types and forwards deprecated members verbatim.
const DEFAULT_SUPPRESSIONS: &[&str] = &[
    "USELESS_CAST",
    "RemoveRedundantQualifierName",
    "OVERRIDE_DEPRECATION",
    "UNCHECKED_CAST",
    "RemoveEmptyPrimaryConstructor",
    "unused",
    "PropertyName",
    "RedundantSuppression",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorOptions {
    /// Package that receives the stub primitives and support units.
    pub runtime_package: String,
    /// Qualified name of the annotation that selects targets.
    pub marker_annotation: String,
    /// Appended to the target's simple name to name the generated subtype.
    pub mock_suffix: String,
    pub indent_width: usize,
    pub suppressions: Vec<String>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions {
            runtime_package: DEFAULT_RUNTIME_PACKAGE.to_string(),
            marker_annotation: DEFAULT_MARKER_ANNOTATION.to_string(),
            mock_suffix: "Mock".to_string(),
            indent_width: 4,
            suppressions: DEFAULT_SUPPRESSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl GeneratorOptions {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Simple name of the generated subtype for a target.
    pub fn mock_class_name(&self, target_simple_name: &str) -> String {
        format!("{target_simple_name}{}", self.mock_suffix)
    }
}
