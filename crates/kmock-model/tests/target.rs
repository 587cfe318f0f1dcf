use super::*;

const MARKER: &str = "dev.kmock.runtime.Mocked";

fn repository() -> TargetType {
    TargetType::interface("com.example", "Repository")
        .annotated(MARKER)
        .with_function(Function::open(
            "find",
            vec![Parameter::new("id", TypeReference::class("kotlin.Long"))],
            TypeReference::class("com.example.User").nullable(),
        ))
        .with_property(Property::open(
            "size",
            TypeReference::class("kotlin.Int"),
            false,
        ))
}

#[test]
fn test_interface_is_eligible_when_marked() {
    let target = repository();
    assert!(target.is_eligible(MARKER));
    assert!(!target.is_class_shaped());
    assert_eq!(target.display_name(), "com.example.Repository");
}

#[test]
fn test_final_sealed_and_local_targets_are_ineligible() {
    let mut target = repository();
    target.modality = Modality::Final;
    assert!(!target.is_eligible(MARKER));

    target.modality = Modality::Sealed;
    assert!(!target.is_eligible(MARKER));

    let mut local = repository();
    local.local = true;
    assert!(!local.is_eligible(MARKER));

    let unmarked = TargetType::interface("com.example", "Plain");
    assert!(!unmarked.is_eligible(MARKER));
}

#[test]
fn test_final_members_are_not_overridable() {
    let target = repository().with_function(
        Function::open("close", vec![], TypeReference::unit()).with_modality(Modality::Final),
    );
    let names: Vec<&str> = target
        .overridable_functions()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, vec!["find"]);
}

#[test]
fn test_unit_detection_uses_qualified_name() {
    assert!(TypeReference::unit().is_unit());
    assert!(!TypeReference::class("com.example.Unit").is_unit());
    assert!(!TypeReference::type_parameter("Unit").is_unit());
}

#[test]
fn test_unresolved_references_are_collected_from_nested_arguments() {
    let list = TypeReference::class("kotlin.collections.List")
        .with_arguments(vec![TypeArgument::invariant(TypeReference::unresolved(
            "Missing",
        ))]);
    let target = repository().with_function(Function::open(
        "all",
        vec![],
        list,
    ));

    assert_eq!(target.unresolved_references(), vec!["Missing".to_string()]);
    assert!(repository().unresolved_references().is_empty());
}

#[test]
fn test_declaration_display_name() {
    assert_eq!(
        TypeReference::class("kotlin.String").declaration.display_name(),
        "kotlin.String"
    );
    assert_eq!(
        TypeReference::type_parameter("T").declaration.display_name(),
        "T"
    );
}

#[test]
fn test_variance_keywords() {
    assert_eq!(Variance::Invariant.keyword(), None);
    assert_eq!(Variance::Covariant.keyword(), Some("out"));
    assert_eq!(Variance::Contravariant.keyword(), Some("in"));
}
