//! Predicate combinators.
//!
//! A [`Predicate`] wraps a pure `Fn(&T) -> bool`. Combinators never touch
//! their operands; they build a new predicate that calls them.
//!
//! ```
//! use kmock_runtime::predicate::{self, Predicate};
//!
//! let small_even: Predicate<i32> = predicate::less_than(10) & Predicate::new(|n| n % 2 == 0);
//! assert!(small_even.test(&4));
//! assert!(small_even.for_exactly_one().test(&[3, 4, 11]));
//! ```

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};
use std::rc::Rc;

pub struct Predicate<T: ?Sized> {
    test: Rc<dyn Fn(&T) -> bool>,
}

impl<T: ?Sized> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Predicate {
            test: Rc::clone(&self.test),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

impl<T: ?Sized + 'static> Predicate<T> {
    pub fn new(test: impl Fn(&T) -> bool + 'static) -> Self {
        Predicate {
            test: Rc::new(test),
        }
    }

    pub fn test(&self, value: &T) -> bool {
        (self.test)(value)
    }

    // =========================================================================
    // Logical combinators
    // =========================================================================

    /// Non-short-circuit "and": both sides are always evaluated.
    pub fn and(&self, other: &Predicate<T>) -> Predicate<T> {
        let (a, b) = (self.clone(), other.clone());
        Predicate::new(move |v| a.test(v) & b.test(v))
    }

    /// Short-circuit "and": `other` is skipped once `self` is false.
    pub fn short_circuit_and(&self, other: &Predicate<T>) -> Predicate<T> {
        let (a, b) = (self.clone(), other.clone());
        Predicate::new(move |v| a.test(v) && b.test(v))
    }

    /// Non-short-circuit "or": both sides are always evaluated.
    pub fn or(&self, other: &Predicate<T>) -> Predicate<T> {
        let (a, b) = (self.clone(), other.clone());
        Predicate::new(move |v| a.test(v) | b.test(v))
    }

    /// Short-circuit "or": `other` is skipped once `self` is true.
    pub fn short_circuit_or(&self, other: &Predicate<T>) -> Predicate<T> {
        let (a, b) = (self.clone(), other.clone());
        Predicate::new(move |v| a.test(v) || b.test(v))
    }

    pub fn xor(&self, other: &Predicate<T>) -> Predicate<T> {
        let (a, b) = (self.clone(), other.clone());
        Predicate::new(move |v| a.test(v) ^ b.test(v))
    }

    pub fn negate(&self) -> Predicate<T> {
        let a = self.clone();
        Predicate::new(move |v| !a.test(v))
    }
}

impl<T: 'static> Predicate<T> {
    // =========================================================================
    // Nullable lifting
    // =========================================================================

    /// Rejects `None`, tests `Some` values with this predicate.
    pub fn require_non_null_and(&self) -> Predicate<Option<T>> {
        let a = self.clone();
        Predicate::new(move |v: &Option<T>| v.as_ref().is_some_and(|inner| a.test(inner)))
    }

    /// Accepts `None`, tests `Some` values with this predicate.
    pub fn accept_null_or(&self) -> Predicate<Option<T>> {
        let a = self.clone();
        Predicate::new(move |v: &Option<T>| v.as_ref().is_none_or(|inner| a.test(inner)))
    }

    // =========================================================================
    // Collection quantifiers
    // =========================================================================

    fn count_in(&self, items: &[T]) -> usize {
        items.iter().filter(|item| self.test(item)).count()
    }

    /// Every element matches. Vacuously true for an empty slice.
    pub fn for_all(&self) -> Predicate<[T]> {
        let a = self.clone();
        Predicate::new(move |items: &[T]| items.iter().all(|item| a.test(item)))
    }

    /// At least one element fails to match.
    pub fn for_not_all(&self) -> Predicate<[T]> {
        self.for_all().negate()
    }

    /// At least one element matches. False for an empty slice.
    pub fn for_any(&self) -> Predicate<[T]> {
        let a = self.clone();
        Predicate::new(move |items: &[T]| items.iter().any(|item| a.test(item)))
    }

    pub fn for_some(&self) -> Predicate<[T]> {
        self.for_any()
    }

    pub fn for_none(&self) -> Predicate<[T]> {
        self.for_any().negate()
    }

    pub fn for_exactly_one(&self) -> Predicate<[T]> {
        self.for_exactly_n(1)
    }

    pub fn for_exactly_n(&self, n: usize) -> Predicate<[T]> {
        let a = self.clone();
        Predicate::new(move |items: &[T]| a.count_in(items) == n)
    }

    pub fn for_at_least_n(&self, n: usize) -> Predicate<[T]> {
        let a = self.clone();
        Predicate::new(move |items: &[T]| a.count_in(items) >= n)
    }

    pub fn for_at_most_n(&self, n: usize) -> Predicate<[T]> {
        let a = self.clone();
        Predicate::new(move |items: &[T]| a.count_in(items) <= n)
    }
}

impl<T: ?Sized + 'static> Not for Predicate<T> {
    type Output = Predicate<T>;

    fn not(self) -> Predicate<T> {
        self.negate()
    }
}

/// `a & b` is the non-short-circuit [`Predicate::and`].
impl<T: ?Sized + 'static> BitAnd for Predicate<T> {
    type Output = Predicate<T>;

    fn bitand(self, rhs: Predicate<T>) -> Predicate<T> {
        self.and(&rhs)
    }
}

/// `a | b` is the non-short-circuit [`Predicate::or`].
impl<T: ?Sized + 'static> BitOr for Predicate<T> {
    type Output = Predicate<T>;

    fn bitor(self, rhs: Predicate<T>) -> Predicate<T> {
        self.or(&rhs)
    }
}

impl<T: ?Sized + 'static> BitXor for Predicate<T> {
    type Output = Predicate<T>;

    fn bitxor(self, rhs: Predicate<T>) -> Predicate<T> {
        self.xor(&rhs)
    }
}

// =============================================================================
// Primitive predicates
// =============================================================================

/// Accepts anything.
pub fn always<T: ?Sized + 'static>() -> Predicate<T> {
    Predicate::new(|_| true)
}

pub fn equal_to<T: PartialEq + 'static>(expected: T) -> Predicate<T> {
    Predicate::new(move |v| *v == expected)
}

pub fn not_equal_to<T: PartialEq + 'static>(expected: T) -> Predicate<T> {
    equal_to(expected).negate()
}

pub fn is_null<T: 'static>() -> Predicate<Option<T>> {
    Predicate::new(Option::is_none)
}

pub fn is_not_null<T: 'static>() -> Predicate<Option<T>> {
    Predicate::new(Option::is_some)
}

pub fn greater_than<T: PartialOrd + 'static>(bound: T) -> Predicate<T> {
    Predicate::new(move |v| *v > bound)
}

pub fn greater_or_equal<T: PartialOrd + 'static>(bound: T) -> Predicate<T> {
    Predicate::new(move |v| *v >= bound)
}

pub fn less_than<T: PartialOrd + 'static>(bound: T) -> Predicate<T> {
    Predicate::new(move |v| *v < bound)
}

pub fn less_or_equal<T: PartialOrd + 'static>(bound: T) -> Predicate<T> {
    Predicate::new(move |v| *v <= bound)
}

/// Accepts collections holding `element`.
pub fn contains<T: PartialEq + 'static>(element: T) -> Predicate<[T]> {
    Predicate::new(move |items: &[T]| items.contains(&element))
}

pub fn not_contains<T: PartialEq + 'static>(element: T) -> Predicate<[T]> {
    contains(element).negate()
}

pub fn starts_with(prefix: impl Into<String>) -> Predicate<str> {
    let prefix = prefix.into();
    Predicate::new(move |s: &str| s.starts_with(prefix.as_str()))
}

pub fn not_starts_with(prefix: impl Into<String>) -> Predicate<str> {
    starts_with(prefix).negate()
}

/// Case-insensitive prefix test, comparing one `char` at a time.
pub fn starts_with_ignoring_case(prefix: impl Into<String>) -> Predicate<str> {
    let prefix = prefix.into();
    Predicate::new(move |s: &str| region_matches_ignoring_case(s.chars(), &prefix))
}

pub fn not_starts_with_ignoring_case(prefix: impl Into<String>) -> Predicate<str> {
    starts_with_ignoring_case(prefix).negate()
}

pub fn ends_with(suffix: impl Into<String>) -> Predicate<str> {
    let suffix = suffix.into();
    Predicate::new(move |s: &str| s.ends_with(suffix.as_str()))
}

pub fn not_ends_with(suffix: impl Into<String>) -> Predicate<str> {
    ends_with(suffix).negate()
}

/// Case-insensitive suffix test, comparing one `char` at a time.
pub fn ends_with_ignoring_case(suffix: impl Into<String>) -> Predicate<str> {
    let suffix = suffix.into();
    let wanted = suffix.chars().count();
    Predicate::new(move |s: &str| {
        let len = s.chars().count();
        len >= wanted && region_matches_ignoring_case(s.chars().skip(len - wanted), &suffix)
    })
}

pub fn not_ends_with_ignoring_case(suffix: impl Into<String>) -> Predicate<str> {
    ends_with_ignoring_case(suffix).negate()
}

/// True when `text` begins with `pattern`, char by char, ignoring case.
fn region_matches_ignoring_case(mut text: impl Iterator<Item = char>, pattern: &str) -> bool {
    pattern
        .chars()
        .all(|p| text.next().is_some_and(|t| chars_equal_ignoring_case(t, p)))
}

/// Same characters, same uppercase, or same lowercase of the uppercase.
fn chars_equal_ignoring_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (upper_a, upper_b) = (simple_uppercase(a), simple_uppercase(b));
    upper_a == upper_b || simple_lowercase(upper_a) == simple_lowercase(upper_b)
}

/// One-to-one uppercase mapping; characters that expand (`ß`) map to themselves.
fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// One-to-one lowercase mapping. `İ` is the only expanding character and its
/// single-char mapping is the leading `i`.
fn simple_lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
#[path = "../tests/predicate.rs"]
mod tests;
