use anyhow::Result;
use clap::Parser;

use kmock_cli::args::CliArgs;
use kmock_cli::driver;

fn main() -> Result<()> {
    // Initialize tracing if KMOCK_LOG or RUST_LOG is set.
    // Supports KMOCK_LOG_FORMAT=tree|json|text (see tracing_config.rs).
    kmock_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let summary = driver::run(&args)?;

    if args.dry_run {
        for unit in &summary.units {
            println!("{unit}");
        }
        return Ok(());
    }

    println!(
        "generated {} mock(s) and {} stub primitive(s) into {}",
        summary.generated.len(),
        summary.primitives,
        args.out_dir.display()
    );
    if !summary.skipped.is_empty() {
        println!("skipped {} ineligible target(s)", summary.skipped.len());
    }
    Ok(())
}
