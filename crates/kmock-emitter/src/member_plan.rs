//! Member planning: which stub field each overridable member gets.
//!
//! Overloads are told apart by a suffix built from their parameters'
//! declared simple type names:
//!
//! ```kotlin
//! fun save(user: User)            // -> save_User
//! fun save(user: User, force: Boolean)  // -> save_User_Boolean
//! fun load(id: Long)              // -> load (not overloaded)
//! ```
//!
//! Properties get `get<Name>` and, when mutable, `set<Name>`.

use kmock_model::{Function, Property, TargetType};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::GenerateError;

/// Shape of a stub primitive: `(arity, has-return)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StubKind {
    pub arity: usize,
    pub returns_value: bool,
}

impl StubKind {
    pub const GETTER: StubKind = StubKind {
        arity: 0,
        returns_value: true,
    };
    pub const SETTER: StubKind = StubKind {
        arity: 1,
        returns_value: false,
    };

    pub fn new(arity: usize, returns_value: bool) -> Self {
        StubKind {
            arity,
            returns_value,
        }
    }

    /// `Mock<arity><0|1>`, e.g. `Mock21` for two parameters and a result.
    pub fn class_name(self) -> String {
        format!("Mock{}{}", self.arity, u8::from(self.returns_value))
    }
}

#[derive(Debug, Clone)]
pub struct FunctionPlan<'a> {
    pub function: &'a Function,
    /// Disambiguated stub field name.
    pub field: String,
    pub kind: StubKind,
}

impl FunctionPlan<'_> {
    pub fn is_void(&self) -> bool {
        !self.kind.returns_value
    }
}

#[derive(Debug, Clone)]
pub struct PropertyPlan<'a> {
    pub property: &'a Property,
    pub getter: String,
    /// Present only for mutable properties.
    pub setter: Option<String>,
}

#[derive(Debug, Clone)]
pub enum MemberPlan<'a> {
    Function(FunctionPlan<'a>),
    Property(PropertyPlan<'a>),
}

impl MemberPlan<'_> {
    /// Stub shapes this member needs, in field order.
    pub fn stub_kinds(&self) -> Vec<StubKind> {
        match self {
            MemberPlan::Function(plan) => vec![plan.kind],
            MemberPlan::Property(plan) => {
                let mut kinds = vec![StubKind::GETTER];
                if plan.setter.is_some() {
                    kinds.push(StubKind::SETTER);
                }
                kinds
            }
        }
    }

    /// Generated field names, in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        match self {
            MemberPlan::Function(plan) => vec![plan.field.as_str()],
            MemberPlan::Property(plan) => {
                let mut names = vec![plan.getter.as_str()];
                if let Some(setter) = &plan.setter {
                    names.push(setter.as_str());
                }
                names
            }
        }
    }
}

/// Functions first, then properties, each in host order.
pub fn plan_members(target: &TargetType) -> Result<Vec<MemberPlan<'_>>, GenerateError> {
    let functions: Vec<&Function> = target.overridable_functions().collect();
    let fields = disambiguate(&functions);
    let mut taken: FxHashSet<String> = FxHashSet::default();
    let mut plans = Vec::with_capacity(functions.len() + target.properties.len());

    for (function, field) in functions.into_iter().zip(fields) {
        let return_type =
            function
                .return_type
                .as_ref()
                .ok_or_else(|| GenerateError::MissingReturnType {
                    target: target.display_name().to_string(),
                    member: function.name.clone(),
                })?;
        let kind = StubKind::new(function.arity(), !return_type.is_unit());
        plans.push(MemberPlan::Function(FunctionPlan {
            function,
            field: claim(&mut taken, field),
            kind,
        }));
    }

    for property in target.overridable_properties() {
        let capitalized = capitalize(&property.name);
        let getter = claim(&mut taken, format!("get{capitalized}"));
        let setter = property
            .mutable
            .then(|| claim(&mut taken, format!("set{capitalized}")));
        plans.push(MemberPlan::Property(PropertyPlan {
            property,
            getter,
            setter,
        }));
    }

    Ok(plans)
}

/// Field names for a list of functions, before global uniqueness is enforced.
///
/// A name shared by more than one function gets `_<Type>` per parameter;
/// unique names are kept as they are.
pub fn disambiguate(functions: &[&Function]) -> Vec<String> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for function in functions {
        *counts.entry(function.name.as_str()).or_default() += 1;
    }
    functions
        .iter()
        .map(|function| {
            if counts[function.name.as_str()] > 1 {
                overload_name(function)
            } else {
                function.name.clone()
            }
        })
        .collect()
}

fn overload_name(function: &Function) -> String {
    let mut name = function.name.clone();
    for param in &function.parameters {
        name.push('_');
        name.push_str(param.ty.simple_name());
    }
    name
}

/// Reserve `candidate`, or the first free `candidate_<n>` if it is taken.
fn claim(taken: &mut FxHashSet<String>, candidate: String) -> String {
    if taken.insert(candidate.clone()) {
        return candidate;
    }
    let mut ordinal = 2;
    loop {
        let next = format!("{candidate}_{ordinal}");
        if taken.insert(next.clone()) {
            return next;
        }
        ordinal += 1;
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "../tests/member_plan.rs"]
mod tests;
