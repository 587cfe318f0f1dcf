//! Overridable members of a target type.

use serde::{Deserialize, Serialize};

use crate::types::{TypeParameter, TypeReference};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    #[default]
    Final,
    Open,
    Abstract,
    Sealed,
}

impl Modality {
    /// Open and abstract declarations can be overridden by a subtype.
    pub fn is_overridable(self) -> bool {
        matches!(self, Modality::Open | Modality::Abstract)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Absent only for malformed host input; generation rejects it.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: TypeReference,
}

impl Parameter {
    pub fn new(name: &str, ty: TypeReference) -> Self {
        Parameter {
            name: Some(name.to_string()),
            ty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// The host always resolves this for member functions; `None` is an
    /// invariant violation reported at generation time.
    #[serde(default)]
    pub return_type: Option<TypeReference>,
    /// Generics introduced by the function itself.
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    #[serde(default)]
    pub modality: Modality,
    #[serde(default)]
    pub suspend: bool,
}

impl Function {
    /// An open function; the usual shape of a mockable member.
    pub fn open(name: &str, parameters: Vec<Parameter>, return_type: TypeReference) -> Self {
        Function {
            name: name.to_string(),
            parameters,
            return_type: Some(return_type),
            type_parameters: Vec::new(),
            modality: Modality::Open,
            suspend: false,
        }
    }

    #[must_use]
    pub fn with_type_parameters(mut self, type_parameters: Vec<TypeParameter>) -> Self {
        self.type_parameters = type_parameters;
        self
    }

    #[must_use]
    pub fn with_modality(mut self, modality: Modality) -> Self {
        self.modality = modality;
        self
    }

    #[must_use]
    pub fn suspending(mut self) -> Self {
        self.suspend = true;
        self
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeReference,
    #[serde(default)]
    pub mutable: bool,
    #[serde(default)]
    pub modality: Modality,
}

impl Property {
    pub fn open(name: &str, ty: TypeReference, mutable: bool) -> Self {
        Property {
            name: name.to_string(),
            ty,
            mutable,
            modality: Modality::Open,
        }
    }
}
