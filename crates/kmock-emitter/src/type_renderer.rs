//! Type-name rendering.
//!
//! Converts a resolved [`TypeReference`] into declaration text. Rendering is
//! a pure function of the reference and the [`ErasureContext`]: the same
//! inputs always produce the same text.
//!
//! Function-local generics cannot be named by a stub field declared on the
//! control surface, so they are erased there:
//!
//! | reference (inside `fun <T> f`) | erased rendering |
//! |---|---|
//! | `T` | `Any?` |
//! | `List<T>` | `kotlin.collections.List<*>` |
//! | `Map<String, List<T>>` | `kotlin.collections.Map<kotlin.String, *>` |
//!
//! An argument that has any erased component anywhere inside it collapses to
//! `*` as a whole, because a star projection cannot be partially specified.

use kmock_model::{DeclarationKind, Function, TypeArgument, TypeParameter, TypeReference};
use rustc_hash::FxHashSet;

/// Top-level placeholder for an erased generic.
pub const ERASED_TYPE: &str = "Any?";
/// Argument-level placeholder for an erased generic.
pub const STAR_PROJECTION: &str = "*";

/// Names of the generic parameters that must not escape their function.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErasureContext {
    names: FxHashSet<String>,
}

impl ErasureContext {
    /// Nothing is erased; used inside the declaring scope itself.
    pub fn none() -> Self {
        Self::default()
    }

    /// Erase the generics a function introduces.
    pub fn for_function(function: &Function) -> Self {
        Self::from_names(function.type_parameters.iter().map(|p| p.name.as_str()))
    }

    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        ErasureContext {
            names: names.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn erases(&self, ty: &TypeReference) -> bool {
        ty.declaration.kind == DeclarationKind::TypeParameter
            && self.names.contains(ty.declaration.simple_name.as_str())
    }
}

/// Render a type occurrence as declaration text.
pub fn render(ty: &TypeReference, erasure: &ErasureContext) -> String {
    if erasure.erases(ty) {
        return ERASED_TYPE.to_string();
    }
    let mut out = String::from(ty.declaration.display_name());
    if !ty.arguments.is_empty() {
        let arguments: Vec<String> = ty
            .arguments
            .iter()
            .map(|arg| render_argument(arg, erasure).unwrap_or_else(|| STAR_PROJECTION.into()))
            .collect();
        out.push('<');
        out.push_str(&arguments.join(", "));
        out.push('>');
    }
    if ty.nullable {
        out.push('?');
    }
    out
}

/// Render one generic argument; `None` when something inside it is erased.
fn render_argument(arg: &TypeArgument, erasure: &ErasureContext) -> Option<String> {
    match arg {
        TypeArgument::Star => Some(STAR_PROJECTION.to_string()),
        TypeArgument::Type { variance, ty } => {
            let text = render_nested(ty, erasure)?;
            Some(match variance.keyword() {
                Some(keyword) => format!("{keyword} {text}"),
                None => text,
            })
        }
    }
}

fn render_nested(ty: &TypeReference, erasure: &ErasureContext) -> Option<String> {
    if erasure.erases(ty) {
        return None;
    }
    let mut out = String::from(ty.declaration.display_name());
    if !ty.arguments.is_empty() {
        let arguments = ty
            .arguments
            .iter()
            .map(|arg| render_argument(arg, erasure))
            .collect::<Option<Vec<_>>>()?;
        out.push('<');
        out.push_str(&arguments.join(", "));
        out.push('>');
    }
    if ty.nullable {
        out.push('?');
    }
    Some(out)
}

// =============================================================================
// Generic parameter lists
// =============================================================================

/// `<A, B>` (names only), or empty when there are no parameters.
pub fn render_type_parameter_names(params: &[TypeParameter]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
    format!("<{}>", names.join(", "))
}

/// `<out A, in B, C>`, keeping declaration-site variance.
pub fn render_type_parameters_with_variance(params: &[TypeParameter]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let rendered: Vec<String> = params
        .iter()
        .map(|p| match p.variance.keyword() {
            Some(keyword) => format!("{keyword} {}", p.name),
            None => p.name.clone(),
        })
        .collect();
    format!("<{}>", rendered.join(", "))
}

/// `<T : Bound>` for a function's own generics. Parameters with more than one
/// bound are declared bare here and constrained in [`render_where_clause`].
pub fn render_function_type_parameters(params: &[TypeParameter]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let rendered: Vec<String> = params
        .iter()
        .map(|p| match p.bounds.as_slice() {
            [single] => format!("{} : {}", p.name, render(single, &ErasureContext::none())),
            _ => p.name.clone(),
        })
        .collect();
    format!("<{}>", rendered.join(", "))
}

/// Body of a `where` clause (`T : A, T : B, U : C`), one entry per bound.
/// `None` when no parameter is bounded.
pub fn render_where_clause(params: &[TypeParameter]) -> Option<String> {
    let entries: Vec<String> = params
        .iter()
        .flat_map(|p| {
            p.bounds
                .iter()
                .map(move |bound| format!("{} : {}", p.name, render(bound, &ErasureContext::none())))
        })
        .collect();
    if entries.is_empty() {
        None
    } else {
        Some(entries.join(", "))
    }
}

/// `where` clause for a function: only parameters that could not be bounded
/// inline by [`render_function_type_parameters`].
pub fn render_function_where_clause(params: &[TypeParameter]) -> Option<String> {
    let multi: Vec<TypeParameter> = params
        .iter()
        .filter(|p| p.bounds.len() > 1)
        .cloned()
        .collect();
    render_where_clause(&multi)
}

#[cfg(test)]
#[path = "../tests/type_renderer.rs"]
mod tests;
