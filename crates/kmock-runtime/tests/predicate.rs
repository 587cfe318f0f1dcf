use super::*;
use std::cell::Cell;

#[test]
fn test_double_negation_is_identity() {
    let p = greater_than(3);
    let twice = !!p.clone();
    for n in -5..10 {
        assert_eq!(twice.test(&n), p.test(&n), "mismatch at {n}");
    }
}

#[test]
fn test_quantifiers_on_empty_collections() {
    let p = equal_to(1);
    let empty: [i32; 0] = [];
    assert!(p.for_all().test(&empty));
    assert!(!p.for_any().test(&empty));
    assert!(!p.for_some().test(&empty));
    assert!(p.for_none().test(&empty));
    assert!(!p.for_not_all().test(&empty));
}

#[test]
fn test_for_exactly_one() {
    assert!(equal_to(2).for_exactly_one().test(&[1, 2, 3]));
    assert!(!equal_to(2).for_exactly_one().test(&[2, 2, 3]));
}

#[test]
fn test_counting_quantifiers() {
    let even = Predicate::new(|n: &i32| n % 2 == 0);
    let items = vec![1, 2, 4, 6, 7];
    assert!(even.for_exactly_n(3).test(&items));
    assert!(even.for_at_least_n(3).test(&items));
    assert!(!even.for_at_least_n(4).test(&items));
    assert!(even.for_at_most_n(3).test(&items));
    assert!(!even.for_at_most_n(2).test(&items));
}

#[test]
fn test_non_short_circuit_and_evaluates_both_sides() {
    let calls = std::rc::Rc::new(Cell::new(0));
    let counter = calls.clone();
    let counting = Predicate::new(move |_: &i32| {
        counter.set(counter.get() + 1);
        true
    });
    let never = Predicate::new(|_: &i32| false);

    assert!(!never.and(&counting).test(&0));
    assert_eq!(calls.get(), 1);

    assert!(!never.short_circuit_and(&counting).test(&0));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_non_short_circuit_or_evaluates_both_sides() {
    let calls = std::rc::Rc::new(Cell::new(0));
    let counter = calls.clone();
    let counting = Predicate::new(move |_: &i32| {
        counter.set(counter.get() + 1);
        false
    });
    let yes = always::<i32>();

    assert!(yes.or(&counting).test(&0));
    assert_eq!(calls.get(), 1);

    assert!(yes.short_circuit_or(&counting).test(&0));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_operators_match_methods() {
    let a = greater_than(0);
    let b = less_than(10);
    for n in [-1, 0, 5, 10, 11] {
        assert_eq!((a.clone() & b.clone()).test(&n), a.and(&b).test(&n));
        assert_eq!((a.clone() | b.clone()).test(&n), a.or(&b).test(&n));
        assert_eq!((a.clone() ^ b.clone()).test(&n), a.xor(&b).test(&n));
    }
}

#[test]
fn test_combinators_are_repeatable() {
    let p = greater_or_equal(5).xor(&less_or_equal(7));
    let first: Vec<bool> = (0..12).map(|n| p.test(&n)).collect();
    let second: Vec<bool> = (0..12).map(|n| p.test(&n)).collect();
    assert_eq!(first, second);
    assert!(p.test(&4));
    assert!(!p.test(&6));
    assert!(p.test(&8));
}

#[test]
fn test_nullable_lifting() {
    let positive = greater_than(0);
    assert!(positive.require_non_null_and().test(&Some(3)));
    assert!(!positive.require_non_null_and().test(&None));
    assert!(!positive.require_non_null_and().test(&Some(-3)));

    assert!(positive.accept_null_or().test(&None));
    assert!(positive.accept_null_or().test(&Some(3)));
    assert!(!positive.accept_null_or().test(&Some(-3)));

    assert!(is_null::<i32>().test(&None));
    assert!(is_not_null::<i32>().test(&Some(1)));
}

#[test]
fn test_equality_and_membership() {
    assert!(equal_to("a").test(&"a"));
    assert!(not_equal_to("a").test(&"b"));
    assert!(contains(3).test(&[1, 2, 3]));
    assert!(not_contains(4).test(&[1, 2, 3]));
}

#[test]
fn test_string_prefix_and_suffix() {
    assert!(starts_with("Mock").test("MockRepository"));
    assert!(!starts_with("mock").test("MockRepository"));
    assert!(starts_with_ignoring_case("mock").test("MockRepository"));
    assert!(not_starts_with("Repo").test("MockRepository"));
    assert!(not_starts_with_ignoring_case("repo").test("MockRepository"));

    assert!(ends_with("Repository").test("MockRepository"));
    assert!(ends_with_ignoring_case("REPOSITORY").test("MockRepository"));
    assert!(not_ends_with("Mock").test("MockRepository"));
    assert!(not_ends_with_ignoring_case("mock").test("MockRepository"));
}

#[test]
fn test_ignoring_case_compares_single_chars() {
    // `İ` lowercases to two chars; a whole-string lowercase would miss these.
    assert!(starts_with_ignoring_case("is").test("İstanbul"));
    assert!(ends_with_ignoring_case("fi").test("CAFİ"));
    assert!(!ends_with_ignoring_case("longer than text").test("short"));
    assert!(starts_with_ignoring_case("").test(""));
    // `ß` has no one-char uppercase, so it only matches itself.
    assert!(!starts_with_ignoring_case("ss").test("ßtraße"));
}
