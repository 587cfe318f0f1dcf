use super::*;
use crate::member_plan::plan_members;
use kmock_model::{TypeArgument, TypeParameter, TypeReference, Variance};

fn render_all(target: &TargetType) -> String {
    let options = GeneratorOptions::default();
    let plans = plan_members(target).unwrap();
    let renderer = MockClassRenderer::new(target, &plans, &options).unwrap();
    let mut w = SourceWriter::new(4);
    renderer.write_preamble(&mut w);
    w.block(&renderer.class_header(), |w| {
        renderer.write_control_surface(w);
        w.blank_line();
        renderer.write_overrides(w);
        w.blank_line();
        renderer.write_lifecycle_helpers(w);
    });
    w.finish()
}

fn string() -> TypeReference {
    TypeReference::class("kotlin.String")
}

#[test]
fn test_interface_mock_shape() {
    let target = TargetType::interface("com.example", "Store")
        .with_function(Function::open(
            "load",
            vec![Parameter::new("id", TypeReference::class("kotlin.Long"))],
            string(),
        ))
        .with_property(Property::open("name", string(), true));
    let text = render_all(&target);

    assert!(text.starts_with("package com.example\n\nimport dev.kmock.runtime.*\n\n@Suppress("));
    assert!(text.contains("class StoreMock : com.example.Store {"));
    assert!(text.contains("    interface Mock {\n        val load: Mock11<kotlin.Long, kotlin.String>\n        val getName: Mock01<kotlin.String>\n        val setName: Mock10<kotlin.String>\n    }"));
    assert!(text.contains("    val mock = object : Mock {\n        override val load = Mock11<kotlin.Long, kotlin.String>()"));
    assert!(text.contains(
        "    override fun load(id: kotlin.Long): kotlin.String = mock.load.call(id) as kotlin.String"
    ));
    assert!(text.contains(
        "    override var name: kotlin.String\n        get() = mock.getName.call()\n        set(value) = mock.setName.call(value)"
    ));
    assert!(text.contains("    infix fun setMocks(block: Mock.() -> Unit) {\n        mock.apply(block)\n    }"));
    assert!(text.ends_with("}\n"));
}

#[test]
fn test_reset_touches_every_field_and_relax_only_void_ones() {
    let target = TargetType::interface("com.example", "Counter")
        .with_function(Function::open("next", vec![], TypeReference::class("kotlin.Int")))
        .with_function(Function::open("clear", vec![], TypeReference::unit()))
        .with_property(Property::open("label", string(), true))
        .with_property(Property::open("size", TypeReference::class("kotlin.Int"), false));
    let text = render_all(&target);

    assert!(text.contains(
        "    fun resetMocks() {\n        mock.next.reset()\n        mock.clear.reset()\n        mock.getLabel.reset()\n        mock.setLabel.reset()\n        mock.getSize.reset()\n    }"
    ));
    assert!(text.contains(
        "    fun relaxMocks() {\n        mock.clear.doesNothing()\n        mock.setLabel.doesNothing()\n    }"
    ));
    assert!(text.contains("    override fun clear(): kotlin.Unit = mock.clear.call()\n"));
    assert!(text.contains("    override val size: kotlin.Int\n        get() = mock.getSize.call()\n"));
}

#[test]
fn test_class_shaped_target_forwards_constructor() {
    let target = TargetType::open_class(
        "com.example",
        "Repo",
        vec![
            Parameter::new("url", string()),
            Parameter::new("retries", TypeReference::class("kotlin.Int")),
        ],
    );
    let text = render_all(&target);
    assert!(text.contains(
        "class RepoMock(url: kotlin.String, retries: kotlin.Int) : com.example.Repo(url, retries) {"
    ));
}

#[test]
fn test_generic_target_keeps_variance_and_bounds() {
    let target = TargetType::interface("com.example", "Source")
        .with_type_parameters(vec![
            TypeParameter::new("T")
                .with_variance(Variance::Covariant)
                .with_bound(TypeReference::class("kotlin.Any")),
            TypeParameter::new("K").with_variance(Variance::Contravariant),
        ])
        .with_function(Function::open("take", vec![], TypeReference::type_parameter("T")));
    let text = render_all(&target);
    assert!(text.contains(
        "class SourceMock<out T, in K> : com.example.Source<T, K> where T : kotlin.Any {"
    ));
    assert!(text.contains("    interface Mock<out T, in K> where T : kotlin.Any {\n        val take: Mock01<T>"));
    assert!(text.contains("    val mock = object : Mock<T, K> {"));
    assert!(text.contains("infix fun setMocks(block: Mock<T, K>.() -> Unit)"));
}

#[test]
fn test_function_generics_are_erased_on_fields_only() {
    let function = Function::open(
        "wrap",
        vec![Parameter::new("value", TypeReference::type_parameter("E"))],
        TypeReference::class("kotlin.collections.List")
            .with_arguments(vec![TypeArgument::invariant(TypeReference::type_parameter("E"))]),
    )
    .with_type_parameters(vec![
        TypeParameter::new("E").with_bound(TypeReference::class("kotlin.Comparable").with_arguments(
            vec![TypeArgument::invariant(TypeReference::type_parameter("E"))],
        )),
    ]);
    let target = TargetType::interface("com.example", "Wrapper").with_function(function);
    let text = render_all(&target);
    assert!(text.contains("val wrap: Mock11<Any?, kotlin.collections.List<*>>"));
    assert!(text.contains(
        "override fun <E : kotlin.Comparable<E>> wrap(value: E): kotlin.collections.List<E> = mock.wrap.call(value) as kotlin.collections.List<E>"
    ));
}

#[test]
fn test_multi_bound_generics_use_where_clause() {
    let function = Function::open("pick", vec![Parameter::new("v", TypeReference::type_parameter("V"))], TypeReference::unit())
        .with_type_parameters(vec![
            TypeParameter::new("V")
                .with_bound(TypeReference::class("kotlin.CharSequence"))
                .with_bound(TypeReference::class("kotlin.Comparable").with_arguments(vec![
                    TypeArgument::invariant(TypeReference::type_parameter("V")),
                ])),
        ]);
    let target = TargetType::interface("com.example", "Picker").with_function(function);
    let text = render_all(&target);
    assert!(text.contains(
        "override fun <V> pick(v: V): kotlin.Unit where V : kotlin.CharSequence, V : kotlin.Comparable<V> = mock.pick.call(v)"
    ));
}

#[test]
fn test_suspend_functions_stay_suspending() {
    let target = TargetType::interface("com.example", "Api")
        .with_function(Function::open("fetch", vec![], string()).suspending());
    let text = render_all(&target);
    assert!(text.contains("override suspend fun fetch(): kotlin.String = mock.fetch.call() as kotlin.String"));
}

#[test]
fn test_same_package_runtime_needs_no_import() {
    let target = TargetType::interface("dev.kmock.runtime", "Local");
    let text = render_all(&target);
    assert!(!text.contains("import "));
}

#[test]
fn test_missing_qualified_name_is_an_error() {
    let mut target = TargetType::interface("com.example", "Nameless");
    target.qualified_name = None;
    let options = GeneratorOptions::default();
    let err = MockClassRenderer::new(&target, &[], &options).err().unwrap();
    assert!(matches!(err, GenerateError::MissingQualifiedName { .. }));
    assert!(err.to_string().contains("Nameless"));
}

#[test]
fn test_unnamed_parameter_is_an_error() {
    let mut param = Parameter::new("x", string());
    param.name = None;
    let target = TargetType::interface("com.example", "Sink")
        .with_function(Function::open("put", vec![param], TypeReference::unit()));
    let options = GeneratorOptions::default();
    let plans = plan_members(&target).unwrap();
    let err = MockClassRenderer::new(&target, &plans, &options).err().unwrap();
    assert_eq!(
        err.to_string(),
        "`com.example.Sink`: a parameter of `put` has no name"
    );
}
