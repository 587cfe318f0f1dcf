//! Fixed Kotlin support units embedded in the binary.
//!
//! The sources under `support/` carry no `package` line; it is prepended for
//! the configured runtime package when a unit is produced.

use crate::sink::{Dependency, GeneratedUnit};

pub const NOT_CONFIGURED_EXCEPTION: &str = "MockNotConfiguredException";
pub const SEQUENCE_EXHAUSTED_EXCEPTION: &str = "MockSequenceExhaustedException";

/// A support source file.
#[derive(Debug, Clone, Copy)]
pub struct SupportFile {
    /// Unit name, without the `.kt` extension.
    pub name: &'static str,
    pub content: &'static str,
}

pub const PREDICATES: SupportFile = SupportFile {
    name: "Predicates",
    content: include_str!("../support/Predicates.kt"),
};

pub const NOT_CONFIGURED: SupportFile = SupportFile {
    name: NOT_CONFIGURED_EXCEPTION,
    content: include_str!("../support/MockNotConfiguredException.kt"),
};

pub const SEQUENCE_EXHAUSTED: SupportFile = SupportFile {
    name: SEQUENCE_EXHAUSTED_EXCEPTION,
    content: include_str!("../support/MockSequenceExhaustedException.kt"),
};

pub const ALL: &[SupportFile] = &[PREDICATES, NOT_CONFIGURED, SEQUENCE_EXHAUSTED];

impl SupportFile {
    pub fn to_unit(self, runtime_package: &str) -> GeneratedUnit {
        let text = if runtime_package.is_empty() {
            self.content.to_string()
        } else {
            format!("package {runtime_package}\n\n{}", self.content)
        };
        GeneratedUnit {
            package: runtime_package.to_string(),
            name: self.name.to_string(),
            dependency: Dependency::Session,
            text,
        }
    }
}

/// Every support unit, in a fixed order.
pub fn support_units(runtime_package: &str) -> Vec<GeneratedUnit> {
    ALL.iter().map(|file| file.to_unit(runtime_package)).collect()
}
