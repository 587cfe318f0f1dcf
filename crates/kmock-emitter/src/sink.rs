//! Output sink boundary.
//!
//! The session never touches the file system. It hands finished units to an
//! [`OutputSink`], which decides where the text goes.

use std::io;

use indexmap::IndexMap;

/// What a generated unit depends on, for incremental invalidation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Dependency {
    /// Regenerate when this source file changes.
    Origin(String),
    /// Session-scoped: shared primitives and support code with no origin.
    Session,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub package: String,
    /// Unit name without extension.
    pub name: String,
    pub dependency: Dependency,
    pub text: String,
}

impl GeneratedUnit {
    /// `package.Name`, or just `Name` in the root package.
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }
}

pub trait OutputSink {
    fn write_unit(&mut self, unit: &GeneratedUnit) -> io::Result<()>;
}

/// Collects units in memory, keyed by qualified name in write order.
#[derive(Debug, Default)]
pub struct MemorySink {
    units: IndexMap<String, GeneratedUnit>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, qualified_name: &str) -> Option<&GeneratedUnit> {
        self.units.get(qualified_name)
    }

    pub fn text(&self, qualified_name: &str) -> Option<&str> {
        self.get(qualified_name).map(|u| u.text.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.units.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl OutputSink for MemorySink {
    fn write_unit(&mut self, unit: &GeneratedUnit) -> io::Result<()> {
        let key = unit.qualified_name();
        if self.units.contains_key(&key) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("unit `{key}` was already written"),
            ));
        }
        self.units.insert(key, unit.clone());
        Ok(())
    }
}
