//! Kotlin mock source generation.
//!
//! Given resolved [`TargetType`](kmock_model::TargetType)s, a [`Session`]
//! produces one mock subtype per target plus the stub primitives those
//! subtypes need, and hands every unit to an [`OutputSink`].
//!
//! Pipeline:
//! - [`member_plan`]: overridable members to disambiguated stub fields
//! - [`type_renderer`]: type references to Kotlin text, erasing function generics
//! - [`mock_class`]: the generated subtype itself
//! - [`primitives`]: the `Mock<arity><0|1>` stub classes and their registry
//! - [`session`]: the driver that ties them together across rounds
//!
//! ```no_run
//! use kmock_emitter::{GeneratorOptions, MemorySink, Session};
//! # let targets: Vec<kmock_model::TargetType> = Vec::new();
//!
//! let mut session = Session::new(GeneratorOptions::default());
//! let mut sink = MemorySink::new();
//! let report = session.process_round(&targets, &mut sink)?;
//! for name in &report.generated {
//!     println!("{name}");
//! }
//! # Ok::<(), kmock_emitter::GenerateError>(())
//! ```

pub mod error;
pub use error::GenerateError;

pub mod options;
pub use options::GeneratorOptions;

pub mod source_writer;
pub use source_writer::SourceWriter;

pub mod type_renderer;
pub use type_renderer::{ErasureContext, render};

pub mod member_plan;
pub use member_plan::{MemberPlan, StubKind, plan_members};

pub mod primitives;
pub use primitives::{PrimitiveRegistry, render_primitive};

pub mod support;

pub mod mock_class;
pub use mock_class::MockClassRenderer;

pub mod sink;
pub use sink::{Dependency, GeneratedUnit, MemorySink, OutputSink};

pub mod session;
pub use session::{Phase, RoundReport, Session};
