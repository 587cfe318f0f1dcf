//! Runtime half of kmock.
//!
//! The generator emits Kotlin stub primitives and a Kotlin predicate library.
//! This crate carries the same two families for Rust callers:
//! - [`Predicate`]: pure, composable boolean tests with collection quantifiers
//! - [`Stub`]: a call-recording, configurable stand-in for one member, keyed
//!   by its argument tuple and return type
//!
//! Stubs are meant for single-threaded test code. A `Stub` is neither `Send`
//! nor `Sync`; sharing one across threads is the caller's problem to solve.

pub mod predicate;
pub use predicate::Predicate;

pub mod stub;
pub use stub::{Stub, StubError};
