//! The emission driver.
//!
//! A [`Session`] lives for one processing session, which may span several
//! rounds. It owns the set of stub primitives already emitted, so each
//! `(arity, has-return)` shape is written exactly once no matter how many
//! targets need it.
//!
//! Each target is processed in one pass:
//!
//! ```text
//! Idle -> PlanningMembers -> EmittingControlSurface -> EmittingOverrides
//!      -> EmittingLifecycleHelpers -> Done
//! ```
//!
//! All text for a target (its subtype plus any primitives it introduces) is
//! built in memory first and only then handed to the sink, so a target that
//! fails leaves nothing behind.

use kmock_model::TargetType;
use rustc_hash::FxHashSet;
use tracing::{Level, debug, info, span, trace};

use crate::error::GenerateError;
use crate::member_plan::{StubKind, plan_members};
use crate::mock_class::MockClassRenderer;
use crate::options::GeneratorOptions;
use crate::primitives::{PrimitiveRegistry, render_primitive};
use crate::sink::{Dependency, GeneratedUnit, OutputSink};
use crate::source_writer::SourceWriter;
use crate::support::support_units;

/// Where a pass over one target currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    PlanningMembers,
    EmittingControlSurface,
    EmittingOverrides,
    EmittingLifecycleHelpers,
    Done,
}

/// Outcome of one round.
#[derive(Debug, Default)]
pub struct RoundReport {
    /// Qualified names of the generated subtype units, in input order.
    pub generated: Vec<String>,
    /// Primitive shapes first emitted in this round.
    pub primitives: Vec<StubKind>,
    /// Targets that still reference unresolved symbols; retry next round.
    pub deferred: Vec<TargetType>,
    /// Targets that are not eligible for generation.
    pub skipped: Vec<String>,
}

impl RoundReport {
    pub fn is_empty(&self) -> bool {
        self.generated.is_empty() && self.primitives.is_empty()
    }
}

/// Everything a target produces, not yet written.
#[derive(Debug)]
struct PendingTarget {
    subtype: GeneratedUnit,
    primitives: Vec<(StubKind, GeneratedUnit)>,
}

/// Tracks the phase of one pass and logs every transition.
struct Pass<'a> {
    target: &'a str,
    phase: Phase,
}

impl<'a> Pass<'a> {
    fn new(target: &'a str) -> Self {
        Pass {
            target,
            phase: Phase::Idle,
        }
    }

    fn advance(&mut self, next: Phase) {
        debug!(target_type = self.target, from = ?self.phase, to = ?next, "phase transition");
        self.phase = next;
    }
}

#[derive(Debug)]
pub struct Session {
    options: GeneratorOptions,
    registry: PrimitiveRegistry,
    /// Qualified names of targets whose subtype is already committed.
    generated: FxHashSet<String>,
    support_emitted: bool,
}

impl Session {
    pub fn new(options: GeneratorOptions) -> Self {
        Session {
            options,
            registry: PrimitiveRegistry::new(),
            generated: FxHashSet::default(),
            support_emitted: false,
        }
    }

    /// Primitive shapes emitted so far in this session.
    pub fn registry(&self) -> &PrimitiveRegistry {
        &self.registry
    }

    /// Process one round of targets.
    ///
    /// Ineligible targets are skipped, unresolved ones are handed back in
    /// [`RoundReport::deferred`]. A target whose subtype was already
    /// generated in this session is ignored. The first error aborts the
    /// round; targets committed before it stay committed.
    pub fn process_round(
        &mut self,
        targets: &[TargetType],
        sink: &mut dyn OutputSink,
    ) -> Result<RoundReport, GenerateError> {
        let _span = span!(Level::DEBUG, "process_round", targets = targets.len()).entered();
        self.emit_support(sink)?;

        let mut report = RoundReport::default();
        for target in targets {
            let name = target.display_name();
            if !target.is_eligible(&self.options.marker_annotation) {
                debug!(target_type = name, "skipping ineligible target");
                report.skipped.push(name.to_string());
                continue;
            }
            let unresolved = target.unresolved_references();
            if !unresolved.is_empty() {
                debug!(target_type = name, ?unresolved, "deferring target with unresolved references");
                report.deferred.push(target.clone());
                continue;
            }

            if self.generated.contains(name) {
                debug!(target_type = name, "ignoring target already generated in this session");
                continue;
            }

            let pending = self.generate(target)?;
            let qualified = pending.subtype.qualified_name();
            let introduced = self.commit(pending, sink)?;
            self.generated.insert(name.to_string());
            report.primitives.extend(introduced);
            report.generated.push(qualified);
        }
        Ok(report)
    }

    /// Build every unit `target` needs without touching the sink or registry.
    fn generate(&self, target: &TargetType) -> Result<PendingTarget, GenerateError> {
        let name = target.display_name();
        let _span = span!(Level::DEBUG, "generate_mock", target_type = name).entered();
        let mut pass = Pass::new(name);

        let origin = target.containing_file.clone().ok_or_else(|| {
            GenerateError::MissingContainingFile {
                target: name.to_string(),
            }
        })?;

        pass.advance(Phase::PlanningMembers);
        let plans = plan_members(target)?;
        let missing = self
            .registry
            .missing(plans.iter().flat_map(|plan| plan.stub_kinds()));
        let primitives = missing
            .into_iter()
            .map(|kind| (kind, self.primitive_unit(kind)))
            .collect();

        let renderer = MockClassRenderer::new(target, &plans, &self.options)?;
        let mut w = SourceWriter::new(self.options.indent_width);
        renderer.write_preamble(&mut w);
        w.block(&renderer.class_header(), |w| {
            pass.advance(Phase::EmittingControlSurface);
            renderer.write_control_surface(w);
            w.blank_line();

            pass.advance(Phase::EmittingOverrides);
            renderer.write_overrides(w);
            w.blank_line();

            pass.advance(Phase::EmittingLifecycleHelpers);
            renderer.write_lifecycle_helpers(w);
        });
        pass.advance(Phase::Done);

        let subtype = GeneratedUnit {
            package: target.package.clone(),
            name: renderer.class_name().to_string(),
            dependency: Dependency::Origin(origin),
            text: w.finish(),
        };
        Ok(PendingTarget {
            subtype,
            primitives,
        })
    }

    /// Write a pending target. Primitives go first and are recorded as soon
    /// as they are written.
    fn commit(
        &mut self,
        pending: PendingTarget,
        sink: &mut dyn OutputSink,
    ) -> Result<Vec<StubKind>, GenerateError> {
        let mut introduced = Vec::with_capacity(pending.primitives.len());
        for (kind, unit) in &pending.primitives {
            write(sink, unit)?;
            trace!(primitive = %kind.class_name(), "emitted stub primitive");
            self.registry.insert(*kind);
            introduced.push(*kind);
        }
        write(sink, &pending.subtype)?;
        info!(unit = %pending.subtype.qualified_name(), "generated mock");
        Ok(introduced)
    }

    fn primitive_unit(&self, kind: StubKind) -> GeneratedUnit {
        GeneratedUnit {
            package: self.options.runtime_package.clone(),
            name: kind.class_name(),
            dependency: Dependency::Session,
            text: render_primitive(kind, &self.options.runtime_package, self.options.indent_width),
        }
    }

    fn emit_support(&mut self, sink: &mut dyn OutputSink) -> Result<(), GenerateError> {
        if self.support_emitted {
            return Ok(());
        }
        for unit in support_units(&self.options.runtime_package) {
            write(sink, &unit)?;
            trace!(unit = %unit.qualified_name(), "emitted support unit");
        }
        self.support_emitted = true;
        Ok(())
    }
}

fn write(sink: &mut dyn OutputSink, unit: &GeneratedUnit) -> Result<(), GenerateError> {
    sink.write_unit(unit).map_err(|source| GenerateError::Sink {
        unit: unit.qualified_name(),
        source,
    })
}

#[cfg(test)]
#[path = "../tests/session.rs"]
mod tests;
