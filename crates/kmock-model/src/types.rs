//! Resolved type occurrences.
//!
//! A [`TypeReference`] is what the host reflection facility hands us for every
//! place a type is written: a parameter type, a return type, a bound, a
//! generic argument. It is already resolved; the model never parses source.

use serde::{Deserialize, Serialize};

/// Qualified name of the canonical empty type. Functions returning it are
/// classified as void-shaped.
pub const UNIT_QUALIFIED_NAME: &str = "kotlin.Unit";

/// Declaration-site or use-site variance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variance {
    #[default]
    Invariant,
    /// `out`
    Covariant,
    /// `in`
    Contravariant,
}

impl Variance {
    /// Keyword written in front of a type parameter or argument, if any.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Variance::Invariant => None,
            Variance::Covariant => Some("out"),
            Variance::Contravariant => Some("in"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeclarationKind {
    Class,
    Interface,
    Object,
    TypeAlias,
    TypeParameter,
    /// The host could not resolve this symbol in the current round.
    Unresolved,
}

impl DeclarationKind {
    /// Named declarations are referenced by their qualified name.
    pub fn is_named(self) -> bool {
        matches!(
            self,
            DeclarationKind::Class
                | DeclarationKind::Interface
                | DeclarationKind::Object
                | DeclarationKind::TypeAlias
        )
    }
}

/// The declaration a type reference points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    pub simple_name: String,
    #[serde(default)]
    pub qualified_name: Option<String>,
    pub kind: DeclarationKind,
}

impl Declaration {
    /// Name used when the declaration is written out: the qualified name for
    /// named declarations, the bare name otherwise.
    pub fn display_name(&self) -> &str {
        if self.kind.is_named() {
            if let Some(qualified) = &self.qualified_name {
                return qualified;
            }
        }
        &self.simple_name
    }
}

/// One generic argument of a type reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeArgument {
    Type {
        #[serde(default)]
        variance: Variance,
        #[serde(rename = "type")]
        ty: TypeReference,
    },
    /// Explicit star projection (`List<*>`).
    Star,
}

impl TypeArgument {
    pub fn invariant(ty: TypeReference) -> Self {
        TypeArgument::Type {
            variance: Variance::Invariant,
            ty,
        }
    }

    pub fn covariant(ty: TypeReference) -> Self {
        TypeArgument::Type {
            variance: Variance::Covariant,
            ty,
        }
    }

    pub fn contravariant(ty: TypeReference) -> Self {
        TypeArgument::Type {
            variance: Variance::Contravariant,
            ty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeReference {
    pub declaration: Declaration,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub arguments: Vec<TypeArgument>,
}

impl TypeReference {
    /// Reference to a class-like declaration by qualified name.
    pub fn class(qualified_name: &str) -> Self {
        let simple_name = qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(qualified_name)
            .to_string();
        TypeReference {
            declaration: Declaration {
                simple_name,
                qualified_name: Some(qualified_name.to_string()),
                kind: DeclarationKind::Class,
            },
            nullable: false,
            arguments: Vec::new(),
        }
    }

    /// Reference to a generic parameter in scope.
    pub fn type_parameter(name: &str) -> Self {
        TypeReference {
            declaration: Declaration {
                simple_name: name.to_string(),
                qualified_name: None,
                kind: DeclarationKind::TypeParameter,
            },
            nullable: false,
            arguments: Vec::new(),
        }
    }

    /// Placeholder for a symbol the host has not resolved yet.
    pub fn unresolved(name: &str) -> Self {
        TypeReference {
            declaration: Declaration {
                simple_name: name.to_string(),
                qualified_name: None,
                kind: DeclarationKind::Unresolved,
            },
            nullable: false,
            arguments: Vec::new(),
        }
    }

    pub fn unit() -> Self {
        Self::class(UNIT_QUALIFIED_NAME)
    }

    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    #[must_use]
    pub fn with_arguments(mut self, arguments: Vec<TypeArgument>) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn simple_name(&self) -> &str {
        &self.declaration.simple_name
    }

    /// Whether this is the canonical empty type (`kotlin.Unit`).
    pub fn is_unit(&self) -> bool {
        self.declaration.qualified_name.as_deref() == Some(UNIT_QUALIFIED_NAME)
    }

    /// Push the simple names of all unresolved symbols reachable from here.
    pub fn collect_unresolved(&self, out: &mut Vec<String>) {
        if self.declaration.kind == DeclarationKind::Unresolved {
            out.push(self.declaration.simple_name.clone());
        }
        for arg in &self.arguments {
            if let TypeArgument::Type { ty, .. } = arg {
                ty.collect_unresolved(out);
            }
        }
    }
}

/// A generic parameter introduced by a type or a function.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeParameter {
    pub name: String,
    #[serde(default)]
    pub variance: Variance,
    #[serde(default)]
    pub bounds: Vec<TypeReference>,
}

impl TypeParameter {
    pub fn new(name: &str) -> Self {
        TypeParameter {
            name: name.to_string(),
            variance: Variance::Invariant,
            bounds: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_variance(mut self, variance: Variance) -> Self {
        self.variance = variance;
        self
    }

    #[must_use]
    pub fn with_bound(mut self, bound: TypeReference) -> Self {
        self.bounds.push(bound);
        self
    }
}
