//! Tracing configuration for inspecting a generation run.
//!
//! Supports three output formats controlled by `KMOCK_LOG_FORMAT`:
//!
//! - `text` (default): standard `tracing-subscriber` flat output
//! - `tree`: hierarchical indented output via `tracing-tree`, one span per
//!   round and per target
//! - `json`: one JSON object per span/event
//!
//! ```bash
//! # Phase transitions for every target, as a tree
//! KMOCK_LOG=debug KMOCK_LOG_FORMAT=tree kmockgen --model model.json
//!
//! # Every crate at debug, kmock_emitter at trace
//! KMOCK_LOG="debug,kmock_emitter=trace" kmockgen --model model.json
//!
//! # Only primitive emission
//! KMOCK_LOG="kmock_emitter::session=trace" kmockgen --model model.json
//! ```
//!
//! The subscriber is only initialised when `KMOCK_LOG` (or `RUST_LOG`) is set.
//! A bare level in `KMOCK_LOG` applies to the kmock crates only; everything
//! else stays at `warn`.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Parse a `KMOCK_LOG_FORMAT` value; anything unknown means text.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("KMOCK_LOG_FORMAT").unwrap_or_default())
    }
}

/// Crates whose events a bare `KMOCK_LOG` level turns on.
const KMOCK_TARGETS: &[&str] = &["kmock_cli", "kmock_emitter", "kmock_model"];

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Expand a bare level such as `debug` into per-crate directives for the
/// kmock crates. Anything else is passed through untouched.
pub fn kmock_directives(value: &str) -> String {
    let level = value.trim().to_lowercase();
    if !LEVELS.contains(&level.as_str()) {
        return value.to_string();
    }
    let mut directives = vec!["warn".to_string()];
    directives.extend(KMOCK_TARGETS.iter().map(|target| format!("{target}={level}")));
    directives.join(",")
}

/// `KMOCK_LOG` wins over `RUST_LOG` when both are set.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("KMOCK_LOG") {
        EnvFilter::builder().parse_lossy(kmock_directives(&val))
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber, writing to stderr.
///
/// Does nothing when neither `KMOCK_LOG` nor `RUST_LOG` is set.
pub fn init_tracing() {
    let has_kmock_log = std::env::var("KMOCK_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_kmock_log && !has_rust_log {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
