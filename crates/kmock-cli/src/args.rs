use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the kmockgen binary.
#[derive(Parser, Debug)]
#[command(
    name = "kmockgen",
    version,
    about = "Generate Kotlin mock subtypes from a resolved symbol model"
)]
pub struct CliArgs {
    /// Symbol model produced by the host adapter (JSON, one entry per round).
    #[arg(short = 'm', long)]
    pub model: PathBuf,

    /// Root directory for generated sources.
    #[arg(short = 'o', long = "outDir", alias = "out-dir", default_value = "build/generated/kmock")]
    pub out_dir: PathBuf,

    /// Path to kmock.json. Defaults to a kmock.json next to the model file.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Print the units that would be generated instead of writing them.
    #[arg(long = "dryRun", alias = "dry-run")]
    pub dry_run: bool,

    // ==================== Configuration Overrides ====================
    /// Package that receives the stub primitives and support units.
    #[arg(long = "runtimePackage", alias = "runtime-package")]
    pub runtime_package: Option<String>,

    /// Qualified name of the annotation that selects targets.
    #[arg(long = "markerAnnotation", alias = "marker-annotation")]
    pub marker_annotation: Option<String>,

    /// Suffix appended to a target's simple name to name its mock.
    #[arg(long = "mockSuffix", alias = "mock-suffix")]
    pub mock_suffix: Option<String>,

    /// Spaces per indentation level in generated code.
    #[arg(long = "indentWidth", alias = "indent-width")]
    pub indent_width: Option<usize>,
}
