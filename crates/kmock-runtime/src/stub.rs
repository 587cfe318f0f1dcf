//! Call-recording stub primitives.
//!
//! One `Stub<A, R>` stands in for one member: `A` is the argument tuple
//! (`()` for no arguments, `(P0,)` for one, `(P0, P1)` for two, ...) and `R`
//! the return type (`()` for void-shaped members). Every call is appended to
//! the history before the configured behavior runs.
//!
//! ```
//! use kmock_runtime::{Stub, predicate};
//!
//! let mut find: Stub<(u64,), Option<&str>> = Stub::new();
//! find.produces_from_sequence([Some("ada"), None]);
//! assert_eq!(find.call((1,)), Ok(Some("ada")));
//! assert_eq!(find.call((2,)), Ok(None));
//! assert_eq!(find.call_count_matching(&predicate::equal_to((2,))), 1);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::predicate::Predicate;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StubError {
    /// `call` ran before any behavior was configured (or after `reset`).
    #[error("mock not configured")]
    NotConfigured,
    /// A sequence-configured stub was called more times than it had answers.
    #[error("mock sequence exhausted after {answered} answers")]
    SequenceExhausted { answered: usize },
    /// The failure installed with `throws_on_call`.
    #[error("{0}")]
    Thrown(Arc<dyn std::error::Error + Send + Sync>),
}

impl PartialEq for StubError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StubError::NotConfigured, StubError::NotConfigured) => true,
            (
                StubError::SequenceExhausted { answered: a },
                StubError::SequenceExhausted { answered: b },
            ) => a == b,
            (StubError::Thrown(a), StubError::Thrown(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

type Behavior<A, R> = Box<dyn FnMut(&A) -> Result<R, StubError>>;

fn unconfigured<A, R>() -> Behavior<A, R> {
    Box::new(|_| Err(StubError::NotConfigured))
}

pub struct Stub<A, R> {
    history: Vec<A>,
    behavior: Behavior<A, R>,
}

impl<A, R> fmt::Debug for Stub<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stub")
            .field("calls", &self.history.len())
            .finish_non_exhaustive()
    }
}

impl<A: 'static, R: 'static> Default for Stub<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: 'static, R: 'static> Stub<A, R> {
    /// A fresh stub: empty history, fails every call until configured.
    pub fn new() -> Self {
        Stub {
            history: Vec::new(),
            behavior: unconfigured(),
        }
    }

    /// Forget recorded calls and go back to failing immediately.
    pub fn reset(&mut self) {
        self.history.clear();
        self.behavior = unconfigured();
    }

    /// Record the call, then answer with the configured behavior.
    pub fn call(&mut self, args: A) -> Result<R, StubError> {
        self.history.push(args);
        let last = &self.history[self.history.len() - 1];
        (self.behavior)(last)
    }

    // =========================================================================
    // Configuration (the last one applied wins)
    // =========================================================================

    pub fn throws_on_call(&mut self, error: impl std::error::Error + Send + Sync + 'static) {
        let error: Arc<dyn std::error::Error + Send + Sync> = Arc::new(error);
        self.behavior = Box::new(move |_| Err(StubError::Thrown(Arc::clone(&error))));
    }

    pub fn produces_value(&mut self, value: R)
    where
        R: Clone,
    {
        self.behavior = Box::new(move |_| Ok(value.clone()));
    }

    /// Answer successive calls with successive values. Once the values run
    /// out every further call fails with [`StubError::SequenceExhausted`].
    pub fn produces_from_sequence(&mut self, values: impl IntoIterator<Item = R> + 'static) {
        let mut values = values.into_iter();
        let mut answered = 0;
        self.behavior = Box::new(move |_| match values.next() {
            Some(value) => {
                answered += 1;
                Ok(value)
            }
            None => Err(StubError::SequenceExhausted { answered }),
        });
    }

    pub fn delegates_to(&mut self, mut answer: impl FnMut(&A) -> R + 'static) {
        self.behavior = Box::new(move |args| Ok(answer(args)));
    }

    /// Answer successive calls by invoking successive functions; exhausts like
    /// [`Stub::produces_from_sequence`].
    pub fn delegates_to_sequence(&mut self, answers: Vec<Box<dyn FnMut(&A) -> R>>) {
        let mut answers = answers.into_iter();
        let mut answered = 0;
        self.behavior = Box::new(move |args| match answers.next() {
            Some(mut answer) => {
                answered += 1;
                Ok(answer(args))
            }
            None => Err(StubError::SequenceExhausted { answered }),
        });
    }

    // =========================================================================
    // History queries
    // =========================================================================

    pub fn call_count(&self) -> usize {
        self.history.len()
    }

    /// Calls whose full argument tuple satisfies `predicate`.
    pub fn call_count_matching(&self, predicate: &Predicate<A>) -> usize {
        self.history.iter().filter(|args| predicate.test(args)).count()
    }

    /// Recorded argument tuples, oldest first.
    pub fn calls(&self) -> &[A] {
        &self.history
    }
}

impl<A: 'static> Stub<A, ()> {
    /// Void-shaped stubs only: succeed without doing anything.
    pub fn does_nothing(&mut self) {
        self.behavior = Box::new(|_| Ok(()));
    }
}

/// Per-argument `call_count_each`: one predicate per position, combined with a
/// short-circuit "and" evaluated left to right.
macro_rules! per_argument_call_count {
    ($first:ident: $F:ident => $fidx:tt $(, $pred:ident: $P:ident => $idx:tt)+) => {
        impl<$F: 'static, $($P: 'static,)+ R: 'static> Stub<($F, $($P,)+), R> {
            pub fn call_count_each(
                &self,
                $first: &Predicate<$F>,
                $($pred: &Predicate<$P>),+
            ) -> usize {
                self.history
                    .iter()
                    .filter(|args| $first.test(&args.$fidx) $(&& $pred.test(&args.$idx))+)
                    .count()
            }
        }
    };
}

per_argument_call_count!(p0: P0 => 0, p1: P1 => 1);
per_argument_call_count!(p0: P0 => 0, p1: P1 => 1, p2: P2 => 2);
per_argument_call_count!(p0: P0 => 0, p1: P1 => 1, p2: P2 => 2, p3: P3 => 3);
per_argument_call_count!(p0: P0 => 0, p1: P1 => 1, p2: P2 => 2, p3: P3 => 3, p4: P4 => 4);
per_argument_call_count!(
    p0: P0 => 0, p1: P1 => 1, p2: P2 => 2, p3: P3 => 3, p4: P4 => 4, p5: P5 => 5
);

#[cfg(test)]
#[path = "../tests/stub.rs"]
mod tests;
