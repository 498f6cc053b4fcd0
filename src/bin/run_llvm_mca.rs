/// run-llvm-mca
///
/// Usage:
///   run-llvm-mca ./a.out
///   run-llvm-mca ./a.out -s main,helper --syntax at&t --all-stats

use anyhow::Result;
use asm_inspect::cli::McaCli;
use asm_inspect::{logging, pipeline, SystemRunner};
use clap::Parser;

fn main() {
    let cli = McaCli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &McaCli) -> Result<()> {
    let report = pipeline::run_analysis(
        &SystemRunner,
        &cli.toolchain(),
        &cli.file,
        &cli.symbols(),
        &cli.analyze_request(),
    )?;

    println!("{}", report);
    Ok(())
}
