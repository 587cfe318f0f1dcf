//! Multi-round generation driver.
//!
//! Targets deferred in one round are offered again in the next, unless that
//! round supplies a fresh copy of the same type, which then replaces them.
//! Anything still unresolved after the last round is an error.

use anyhow::{Context, Result, bail};
use kmock_emitter::{GeneratorOptions, MemorySink, OutputSink, Session};
use kmock_model::{ModelFile, TargetType};

use crate::args::CliArgs;
use crate::config::resolve_options;
use crate::directory_sink::DirectorySink;

#[derive(Debug, Default)]
pub struct RunSummary {
    /// Generated mock subtypes, in generation order.
    pub generated: Vec<String>,
    /// Number of stub primitives emitted.
    pub primitives: usize,
    pub skipped: Vec<String>,
    /// Every unit handed to the sink, support and primitives included.
    pub units: Vec<String>,
}

/// Drive a session over every round in `model`.
pub fn generate(
    model: &ModelFile,
    options: GeneratorOptions,
    sink: &mut dyn OutputSink,
) -> Result<RunSummary> {
    let mut session = Session::new(options);
    let mut summary = RunSummary::default();
    let mut carried: Vec<TargetType> = Vec::new();

    for (index, round) in model.rounds.iter().enumerate() {
        let mut targets: Vec<TargetType> = carried
            .into_iter()
            .filter(|old| {
                !round
                    .iter()
                    .any(|fresh| fresh.display_name() == old.display_name())
            })
            .collect();
        targets.extend(round.iter().cloned());
        tracing::debug!(round = index + 1, targets = targets.len(), "starting round");

        let report = session
            .process_round(&targets, sink)
            .with_context(|| format!("generation failed in round {}", index + 1))?;
        summary.generated.extend(report.generated);
        summary.primitives += report.primitives.len();
        summary.skipped.extend(report.skipped);
        carried = report.deferred;
    }

    if !carried.is_empty() {
        let details: Vec<String> = carried
            .iter()
            .map(|t| {
                format!(
                    "{} (unresolved: {})",
                    t.display_name(),
                    t.unresolved_references().join(", ")
                )
            })
            .collect();
        bail!(
            "{} target(s) still reference unresolved symbols after the final round: {}",
            carried.len(),
            details.join("; ")
        );
    }
    Ok(summary)
}

/// Entry point behind the binary.
pub fn run(args: &CliArgs) -> Result<RunSummary> {
    let options = resolve_options(args)?;
    let model = ModelFile::load(&args.model)
        .with_context(|| format!("failed to load model: {}", args.model.display()))?;
    tracing::info!(
        rounds = model.rounds.len(),
        targets = model.target_count(),
        "loaded model"
    );

    if args.dry_run {
        let mut sink = MemorySink::new();
        let mut summary = generate(&model, options, &mut sink)?;
        summary.units = sink.names().map(str::to_string).collect();
        return Ok(summary);
    }

    let mut sink = DirectorySink::new(&args.out_dir);
    let mut summary = generate(&model, options, &mut sink)?;
    let manifest = sink
        .finish()
        .with_context(|| format!("failed to write manifest in {}", args.out_dir.display()))?;
    tracing::debug!(manifest = %manifest.display(), "wrote dependency manifest");
    summary.units = sink.manifest().units.into_iter().map(|e| e.unit).collect();
    Ok(summary)
}

#[cfg(test)]
#[path = "../tests/driver.rs"]
mod tests;
