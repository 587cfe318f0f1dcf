//! The type being mocked.

use serde::{Deserialize, Serialize};

use crate::members::{Function, Modality, Parameter, Property};
use crate::types::{TypeParameter, TypeReference};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetType {
    /// Package / namespace; empty for the root package.
    #[serde(default)]
    pub package: String,
    pub simple_name: String,
    #[serde(default)]
    pub qualified_name: Option<String>,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    /// Present for class-shaped targets, absent for interfaces.
    #[serde(default)]
    pub primary_constructor: Option<Vec<Parameter>>,
    #[serde(default)]
    pub modality: Modality,
    /// Declared inside a function or another local scope.
    #[serde(default)]
    pub local: bool,
    /// Qualified names of the annotations carried by the declaration.
    #[serde(default)]
    pub annotations: Vec<String>,
    /// Identity of the defining source file, used for incremental invalidation.
    #[serde(default)]
    pub containing_file: Option<String>,
    /// All functions reachable through inheritance, in host order.
    #[serde(default)]
    pub functions: Vec<Function>,
    /// All properties reachable through inheritance, in host order.
    #[serde(default)]
    pub properties: Vec<Property>,
}

impl TargetType {
    pub fn interface(package: &str, simple_name: &str) -> Self {
        let qualified_name = if package.is_empty() {
            simple_name.to_string()
        } else {
            format!("{package}.{simple_name}")
        };
        TargetType {
            package: package.to_string(),
            simple_name: simple_name.to_string(),
            qualified_name: Some(qualified_name),
            type_parameters: Vec::new(),
            primary_constructor: None,
            modality: Modality::Abstract,
            local: false,
            annotations: Vec::new(),
            containing_file: None,
            functions: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn open_class(package: &str, simple_name: &str, constructor: Vec<Parameter>) -> Self {
        TargetType {
            primary_constructor: Some(constructor),
            modality: Modality::Open,
            ..Self::interface(package, simple_name)
        }
    }

    #[must_use]
    pub fn annotated(mut self, annotation: &str) -> Self {
        self.annotations.push(annotation.to_string());
        self
    }

    #[must_use]
    pub fn in_file(mut self, file: &str) -> Self {
        self.containing_file = Some(file.to_string());
        self
    }

    #[must_use]
    pub fn with_type_parameters(mut self, type_parameters: Vec<TypeParameter>) -> Self {
        self.type_parameters = type_parameters;
        self
    }

    #[must_use]
    pub fn with_function(mut self, function: Function) -> Self {
        self.functions.push(function);
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Name used in logs and diagnostics.
    pub fn display_name(&self) -> &str {
        self.qualified_name.as_deref().unwrap_or(&self.simple_name)
    }

    /// Class-shaped targets have a primary constructor the mock must call.
    pub fn is_class_shaped(&self) -> bool {
        self.primary_constructor.is_some()
    }

    pub fn has_annotation(&self, qualified_name: &str) -> bool {
        self.annotations.iter().any(|a| a == qualified_name)
    }

    /// Selected for generation: marked, overridable and not locally scoped.
    pub fn is_eligible(&self, marker: &str) -> bool {
        self.has_annotation(marker) && self.modality.is_overridable() && !self.local
    }

    pub fn overridable_functions(&self) -> impl Iterator<Item = &Function> {
        self.functions.iter().filter(|f| f.modality.is_overridable())
    }

    pub fn overridable_properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(|p| p.modality.is_overridable())
    }

    /// Simple names of every unresolved symbol in the member graph that
    /// generation would touch. Empty means the target is ready.
    pub fn unresolved_references(&self) -> Vec<String> {
        let mut out = Vec::new();
        for param in &self.type_parameters {
            collect_all(&param.bounds, &mut out);
        }
        if let Some(ctor) = &self.primary_constructor {
            for param in ctor {
                param.ty.collect_unresolved(&mut out);
            }
        }
        for function in self.overridable_functions() {
            for param in &function.parameters {
                param.ty.collect_unresolved(&mut out);
            }
            if let Some(ret) = &function.return_type {
                ret.collect_unresolved(&mut out);
            }
            for param in &function.type_parameters {
                collect_all(&param.bounds, &mut out);
            }
        }
        for property in self.overridable_properties() {
            property.ty.collect_unresolved(&mut out);
        }
        out
    }
}

fn collect_all(types: &[TypeReference], out: &mut Vec<String>) {
    for ty in types {
        ty.collect_unresolved(out);
    }
}
