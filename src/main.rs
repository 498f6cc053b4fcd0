/// view-cpu-features
///
/// Usage:
///   view-cpu-features ./libstr.so -s strlen_avx2
///   view-cpu-features ./libstr.so -s strlen_avx2 --cpu znver3 --format json

use anyhow::Result;
use asm_inspect::cli::FeaturesCli;
use asm_inspect::{logging, pipeline, report, FeatureTable, SystemRunner};
use clap::Parser;

fn main() {
    let cli = FeaturesCli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &FeaturesCli) -> Result<()> {
    let found = pipeline::run_feature_detection(
        &SystemRunner,
        &cli.toolchain(),
        &FeatureTable::builtin(),
        &cli.file,
        &cli.symbol,
        cli.cpu.as_deref(),
    )?;

    println!("{}", report::render(&found, cli.format)?);
    Ok(())
}
