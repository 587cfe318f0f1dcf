use super::*;
use kmock_model::{Parameter, Variance};

fn list_of(arg: TypeArgument) -> TypeReference {
    TypeReference::class("kotlin.collections.List").with_arguments(vec![arg])
}

fn string() -> TypeReference {
    TypeReference::class("kotlin.String")
}

#[test]
fn test_plain_and_nullable_names() {
    let none = ErasureContext::none();
    assert_eq!(render(&string(), &none), "kotlin.String");
    assert_eq!(render(&string().nullable(), &none), "kotlin.String?");
    assert_eq!(render(&TypeReference::type_parameter("T"), &none), "T");
    assert_eq!(
        render(&TypeReference::type_parameter("T").nullable(), &none),
        "T?"
    );
}

#[test]
fn test_generic_arguments_with_variance() {
    let none = ErasureContext::none();
    let ty = TypeReference::class("kotlin.collections.Map").with_arguments(vec![
        TypeArgument::invariant(string()),
        TypeArgument::covariant(list_of(TypeArgument::contravariant(
            TypeReference::class("kotlin.Int").nullable(),
        ))),
    ]);
    assert_eq!(
        render(&ty, &none),
        "kotlin.collections.Map<kotlin.String, out kotlin.collections.List<in kotlin.Int?>>"
    );
}

#[test]
fn test_explicit_star_is_kept() {
    let ty = list_of(TypeArgument::Star).nullable();
    assert_eq!(
        render(&ty, &ErasureContext::none()),
        "kotlin.collections.List<*>?"
    );
}

#[test]
fn test_erased_top_level_generic_becomes_any() {
    let erase = ErasureContext::from_names(["T"]);
    assert_eq!(render(&TypeReference::type_parameter("T"), &erase), ERASED_TYPE);
    assert_eq!(
        render(&TypeReference::type_parameter("T").nullable(), &erase),
        "Any?"
    );
    // A class that merely shares the name is not erased.
    assert_eq!(
        render(&TypeReference::class("com.example.T"), &erase),
        "com.example.T"
    );
}

#[test]
fn test_erased_argument_collapses_to_star() {
    let erase = ErasureContext::from_names(["T"]);
    let ty = list_of(TypeArgument::covariant(TypeReference::type_parameter("T")));
    assert_eq!(render(&ty, &erase), "kotlin.collections.List<*>");
}

#[test]
fn test_erasure_poisons_whole_nested_argument() {
    let erase = ErasureContext::from_names(["T"]);
    let pair = TypeReference::class("kotlin.Pair").with_arguments(vec![
        TypeArgument::invariant(TypeReference::type_parameter("T")),
        TypeArgument::invariant(string()),
    ]);
    let ty = TypeReference::class("kotlin.collections.Map").with_arguments(vec![
        TypeArgument::invariant(string()),
        TypeArgument::invariant(list_of(TypeArgument::invariant(pair.clone()))),
    ]);
    assert_eq!(
        render(&ty, &erase),
        "kotlin.collections.Map<kotlin.String, *>"
    );
    // Siblings at the top level keep their real names.
    let top = TypeReference::class("kotlin.Pair").with_arguments(vec![
        TypeArgument::invariant(TypeReference::type_parameter("T")),
        TypeArgument::invariant(string()),
    ]);
    assert_eq!(render(&top, &erase), "kotlin.Pair<*, kotlin.String>");
    // Without erasure nothing collapses.
    assert_eq!(
        render(&pair, &ErasureContext::none()),
        "kotlin.Pair<T, kotlin.String>"
    );
}

#[test]
fn test_non_generic_types_never_render_placeholders() {
    let function = Function::open(
        "save",
        vec![Parameter::new("value", string())],
        TypeReference::unit(),
    );
    let erase = ErasureContext::for_function(&function);
    assert!(erase.is_empty());
    let text = render(&function.parameters[0].ty, &erase);
    assert!(!text.contains('*') && !text.contains("Any?"), "{text}");
}

#[test]
fn test_rendering_is_repeatable() {
    let erase = ErasureContext::from_names(["T", "U"]);
    let ty = list_of(TypeArgument::invariant(TypeReference::type_parameter("U")));
    assert_eq!(render(&ty, &erase), render(&ty, &erase.clone()));
}

#[test]
fn test_type_parameter_lists() {
    let params = vec![
        TypeParameter::new("K").with_variance(Variance::Contravariant),
        TypeParameter::new("V")
            .with_variance(Variance::Covariant)
            .with_bound(TypeReference::class("kotlin.Any")),
        TypeParameter::new("E"),
    ];
    assert_eq!(render_type_parameter_names(&params), "<K, V, E>");
    assert_eq!(
        render_type_parameters_with_variance(&params),
        "<in K, out V, E>"
    );
    assert_eq!(
        render_where_clause(&params).as_deref(),
        Some("V : kotlin.Any")
    );
    assert_eq!(render_type_parameter_names(&[]), "");
    assert_eq!(render_where_clause(&[]), None);
}

#[test]
fn test_function_type_parameters_and_where_clause() {
    let comparable = TypeReference::class("kotlin.Comparable")
        .with_arguments(vec![TypeArgument::invariant(TypeReference::type_parameter("T"))]);
    let params = vec![
        TypeParameter::new("T").with_bound(comparable),
        TypeParameter::new("U")
            .with_bound(TypeReference::class("java.io.Serializable"))
            .with_bound(TypeReference::class("kotlin.CharSequence")),
    ];
    assert_eq!(
        render_function_type_parameters(&params),
        "<T : kotlin.Comparable<T>, U>"
    );
    assert_eq!(
        render_function_where_clause(&params).as_deref(),
        Some("U : java.io.Serializable, U : kotlin.CharSequence")
    );
}
