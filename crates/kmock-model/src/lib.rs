//! Symbol model for the kmock generator.
//!
//! This crate is the boundary with the host reflection facility:
//! - Resolved type occurrences (`TypeReference`, `TypeArgument`, `Variance`)
//! - Overridable members (`Function`, `Property`, `Parameter`)
//! - The target type itself (`TargetType`) with eligibility and resolution checks
//! - The JSON model file a host adapter produces (`ModelFile`)
//!
//! Everything here is plain data. The generator only ever reads it.

pub mod types;
pub use types::{
    Declaration, DeclarationKind, TypeArgument, TypeParameter, TypeReference, UNIT_QUALIFIED_NAME,
    Variance,
};

pub mod members;
pub use members::{Function, Modality, Parameter, Property};

pub mod target;
pub use target::TargetType;

pub mod model_file;
pub use model_file::{ModelError, ModelFile};

#[cfg(test)]
#[path = "../tests/target.rs"]
mod tests;
