//! Resolution of the effective generator options.
//!
//! Precedence, lowest first: built-in defaults, `kmock.json`, CLI flags.

use anyhow::{Context, Result};
use kmock_emitter::GeneratorOptions;
use std::path::{Path, PathBuf};

use crate::args::CliArgs;

pub const CONFIG_FILE_NAME: &str = "kmock.json";

/// Load options from `path`.
pub fn load_options(path: &Path) -> Result<GeneratorOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    GeneratorOptions::from_json(&text)
        .with_context(|| format!("failed to parse config file: {}", path.display()))
}

/// The explicit `--config`, or a `kmock.json` beside the model if one exists.
pub fn find_config(args: &CliArgs) -> Option<PathBuf> {
    if let Some(path) = &args.config {
        return Some(path.clone());
    }
    let candidate = args
        .model
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

pub fn resolve_options(args: &CliArgs) -> Result<GeneratorOptions> {
    let mut options = match find_config(args) {
        Some(path) => {
            tracing::debug!(config = %path.display(), "loading configuration");
            load_options(&path)?
        }
        None => GeneratorOptions::default(),
    };
    apply_cli_overrides(&mut options, args);
    Ok(options)
}

pub fn apply_cli_overrides(options: &mut GeneratorOptions, args: &CliArgs) {
    if let Some(package) = &args.runtime_package {
        options.runtime_package = package.clone();
    }
    if let Some(marker) = &args.marker_annotation {
        options.marker_annotation = marker.clone();
    }
    if let Some(suffix) = &args.mock_suffix {
        options.mock_suffix = suffix.clone();
    }
    if let Some(width) = args.indent_width {
        options.indent_width = width;
    }
}

#[cfg(test)]
#[path = "../tests/config.rs"]
mod tests;
