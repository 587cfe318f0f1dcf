//! Rendering of the generated mock subtype.
//!
//! For `interface Store { fun load(id: Long): String }` the output reads:
//!
//! ```kotlin
//! class StoreMock : com.example.Store {
//!     interface Mock {
//!         val load: Mock11<kotlin.Long, kotlin.String>
//!     }
//!
//!     val mock = object : Mock {
//!         override val load = Mock11<kotlin.Long, kotlin.String>()
//!     }
//!
//!     override fun load(id: kotlin.Long): kotlin.String = mock.load.call(id) as kotlin.String
//!
//!     fun resetMocks() { ... }
//!     fun relaxMocks() { ... }
//!     infix fun setMocks(block: Mock.() -> Unit) { ... }
//! }
//! ```
//!
//! The renderer only writes; the session decides when each section is
//! emitted. Everything that can fail is checked in [`MockClassRenderer::new`].

use kmock_model::{Function, Parameter, Property, TargetType};

use crate::error::GenerateError;
use crate::member_plan::{FunctionPlan, MemberPlan, PropertyPlan, StubKind};
use crate::options::GeneratorOptions;
use crate::source_writer::SourceWriter;
use crate::type_renderer::{
    ErasureContext, render, render_function_type_parameters, render_function_where_clause,
    render_type_parameter_names, render_type_parameters_with_variance, render_where_clause,
};

/// Name of the nested control surface interface.
const CONTROL_SURFACE: &str = "Mock";
/// Name of the property holding the live control surface.
const CONTROL_FIELD: &str = "mock";

pub struct MockClassRenderer<'a> {
    target: &'a TargetType,
    qualified_name: &'a str,
    plans: &'a [MemberPlan<'a>],
    options: &'a GeneratorOptions,
    class_name: String,
}

impl<'a> MockClassRenderer<'a> {
    /// Validate the target for rendering.
    ///
    /// Fails when the target has no qualified name or when any parameter that
    /// would be forwarded (constructor or function) is unnamed.
    pub fn new(
        target: &'a TargetType,
        plans: &'a [MemberPlan<'a>],
        options: &'a GeneratorOptions,
    ) -> Result<Self, GenerateError> {
        let qualified_name =
            target
                .qualified_name
                .as_deref()
                .ok_or_else(|| GenerateError::MissingQualifiedName {
                    simple_name: target.simple_name.clone(),
                })?;

        if let Some(ctor) = &target.primary_constructor {
            check_named(target, "constructor", ctor)?;
        }
        for plan in plans {
            if let MemberPlan::Function(plan) = plan {
                check_named(target, &plan.function.name, &plan.function.parameters)?;
            }
        }

        Ok(MockClassRenderer {
            target,
            qualified_name,
            plans,
            options,
            class_name: options.mock_class_name(&target.simple_name),
        })
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// `package`, runtime import and the suppression annotation.
    pub fn write_preamble(&self, w: &mut SourceWriter) {
        let runtime = self.options.runtime_package.as_str();
        if !self.target.package.is_empty() {
            w.line(&format!("package {}", self.target.package));
            w.blank_line();
        }
        if !runtime.is_empty() && runtime != self.target.package {
            w.line(&format!("import {runtime}.*"));
            w.blank_line();
        }
        if !self.options.suppressions.is_empty() {
            let names: Vec<String> = self
                .options
                .suppressions
                .iter()
                .map(|s| format!("\"{s}\""))
                .collect();
            w.line(&format!("@Suppress({})", names.join(", ")));
        }
    }

    /// `class FooMock<out T>(a: A) : pkg.Foo<T>(a) where T : B`, without the brace.
    pub fn class_header(&self) -> String {
        let params = &self.target.type_parameters;
        let none = ErasureContext::none();
        let mut header = format!(
            "class {}{}",
            self.class_name,
            render_type_parameters_with_variance(params)
        );
        let supertype = format!("{}{}", self.qualified_name, render_type_parameter_names(params));
        match &self.target.primary_constructor {
            Some(ctor) => {
                let declared: Vec<String> = ctor
                    .iter()
                    .map(|p| format!("{}: {}", param_name(p), render(&p.ty, &none)))
                    .collect();
                let forwarded: Vec<&str> = ctor.iter().map(param_name).collect();
                header.push_str(&format!(
                    "({}) : {supertype}({})",
                    declared.join(", "),
                    forwarded.join(", ")
                ));
            }
            None => header.push_str(&format!(" : {supertype}")),
        }
        if let Some(clause) = render_where_clause(params) {
            header.push_str(&format!(" where {clause}"));
        }
        header
    }

    /// The nested interface with one stub field per planned member.
    pub fn write_control_surface(&self, w: &mut SourceWriter) {
        let params = &self.target.type_parameters;
        let mut header = format!(
            "interface {CONTROL_SURFACE}{}",
            render_type_parameters_with_variance(params)
        );
        if let Some(clause) = render_where_clause(params) {
            header.push_str(&format!(" where {clause}"));
        }
        w.block(&header, |w| {
            for (field, stub_type) in self.stub_fields() {
                w.line(&format!("val {field}: {stub_type}"));
            }
        });
    }

    /// The live control surface instance and every member override.
    pub fn write_overrides(&self, w: &mut SourceWriter) {
        let header = format!("val {CONTROL_FIELD} = object : {}", self.control_surface_type());
        w.block(&header, |w| {
            for (field, stub_type) in self.stub_fields() {
                w.line(&format!("override val {field} = {stub_type}()"));
            }
        });

        for plan in self.plans {
            w.blank_line();
            match plan {
                MemberPlan::Function(plan) => self.write_function_override(w, plan),
                MemberPlan::Property(plan) => self.write_property_override(w, plan),
            }
        }
    }

    /// `resetMocks`, `relaxMocks` and `setMocks`.
    pub fn write_lifecycle_helpers(&self, w: &mut SourceWriter) {
        w.block("fun resetMocks()", |w| {
            for plan in self.plans {
                for field in plan.field_names() {
                    w.line(&format!("{CONTROL_FIELD}.{field}.reset()"));
                }
            }
        });

        w.blank_line();
        w.block("fun relaxMocks()", |w| {
            for field in self.relaxed_fields() {
                w.line(&format!("{CONTROL_FIELD}.{field}.doesNothing()"));
            }
        });

        w.blank_line();
        let header = format!(
            "infix fun setMocks(block: {}.() -> Unit)",
            self.control_surface_type()
        );
        w.block(&header, |w| {
            w.line(&format!("{CONTROL_FIELD}.apply(block)"));
        });
    }

    fn control_surface_type(&self) -> String {
        format!(
            "{CONTROL_SURFACE}{}",
            render_type_parameter_names(&self.target.type_parameters)
        )
    }

    /// `(field, stub type)` pairs in field order.
    fn stub_fields(&self) -> Vec<(&str, String)> {
        let mut fields = Vec::new();
        for plan in self.plans {
            match plan {
                MemberPlan::Function(plan) => {
                    fields.push((plan.field.as_str(), function_stub_type(plan)));
                }
                MemberPlan::Property(plan) => {
                    let ty = render(&plan.property.ty, &ErasureContext::none());
                    fields.push((
                        plan.getter.as_str(),
                        format!("{}<{ty}>", StubKind::GETTER.class_name()),
                    ));
                    if let Some(setter) = &plan.setter {
                        fields.push((
                            setter.as_str(),
                            format!("{}<{ty}>", StubKind::SETTER.class_name()),
                        ));
                    }
                }
            }
        }
        fields
    }

    /// Void-shaped function fields and every setter.
    fn relaxed_fields(&self) -> Vec<&str> {
        let mut fields = Vec::new();
        for plan in self.plans {
            match plan {
                MemberPlan::Function(plan) if plan.is_void() => fields.push(plan.field.as_str()),
                MemberPlan::Function(_) => {}
                MemberPlan::Property(plan) => fields.extend(plan.setter.as_deref()),
            }
        }
        fields
    }

    fn write_function_override(&self, w: &mut SourceWriter, plan: &FunctionPlan<'_>) {
        let function = plan.function;
        let none = ErasureContext::none();
        let mut line = String::from("override ");
        if function.suspend {
            line.push_str("suspend ");
        }
        line.push_str("fun ");
        let generics = render_function_type_parameters(&function.type_parameters);
        if !generics.is_empty() {
            line.push_str(&generics);
            line.push(' ');
        }
        let declared: Vec<String> = function
            .parameters
            .iter()
            .map(|p| format!("{}: {}", param_name(p), render(&p.ty, &none)))
            .collect();
        let return_type = function_return_type(function, &none);
        line.push_str(&format!(
            "{}({}): {return_type}",
            function.name,
            declared.join(", ")
        ));
        if let Some(clause) = render_function_where_clause(&function.type_parameters) {
            line.push_str(&format!(" where {clause}"));
        }

        let forwarded: Vec<&str> = function.parameters.iter().map(param_name).collect();
        line.push_str(&format!(
            " = {CONTROL_FIELD}.{}.call({})",
            plan.field,
            forwarded.join(", ")
        ));
        if !plan.is_void() {
            line.push_str(&format!(" as {return_type}"));
        }
        w.line(&line);
    }

    fn write_property_override(&self, w: &mut SourceWriter, plan: &PropertyPlan<'_>) {
        let property: &Property = plan.property;
        let ty = render(&property.ty, &ErasureContext::none());
        let keyword = if plan.setter.is_some() { "var" } else { "val" };
        w.line(&format!("override {keyword} {}: {ty}", property.name));
        w.indented(|w| {
            w.line(&format!("get() = {CONTROL_FIELD}.{}.call()", plan.getter));
            if let Some(setter) = &plan.setter {
                w.line(&format!("set(value) = {CONTROL_FIELD}.{setter}.call(value)"));
            }
        });
    }
}

/// `Mock21<A, B, R>` with the function's own generics erased.
fn function_stub_type(plan: &FunctionPlan<'_>) -> String {
    let erasure = ErasureContext::for_function(plan.function);
    let mut arguments: Vec<String> = plan
        .function
        .parameters
        .iter()
        .map(|p| render(&p.ty, &erasure))
        .collect();
    if !plan.is_void() {
        arguments.push(function_return_type(plan.function, &erasure));
    }
    if arguments.is_empty() {
        plan.kind.class_name()
    } else {
        format!("{}<{}>", plan.kind.class_name(), arguments.join(", "))
    }
}

fn function_return_type(function: &Function, erasure: &ErasureContext) -> String {
    // Planning already rejected functions without a return type.
    function
        .return_type
        .as_ref()
        .map(|ty| render(ty, erasure))
        .unwrap_or_else(|| kmock_model::UNIT_QUALIFIED_NAME.to_string())
}

fn param_name(param: &Parameter) -> &str {
    param.name.as_deref().unwrap_or_default()
}

fn check_named(target: &TargetType, member: &str, params: &[Parameter]) -> Result<(), GenerateError> {
    if params.iter().any(|p| p.name.is_none()) {
        return Err(GenerateError::UnnamedParameter {
            target: target.display_name().to_string(),
            member: member.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/mock_class.rs"]
mod tests;
