//! Generator failures.
//!
//! Unresolved input and ineligible targets are not errors: the session defers
//! or skips them. What remains here aborts the session, and every message
//! names the offending type and, where there is one, the member.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("target `{simple_name}` has no qualified name")]
    MissingQualifiedName { simple_name: String },

    #[error("`{target}`: function `{member}` has no resolved return type")]
    MissingReturnType { target: String, member: String },

    #[error("`{target}` has no containing file to depend on")]
    MissingContainingFile { target: String },

    #[error("`{target}`: a parameter of `{member}` has no name")]
    UnnamedParameter { target: String, member: String },

    #[error("failed to write generated unit `{unit}`")]
    Sink {
        unit: String,
        #[source]
        source: io::Error,
    },
}
