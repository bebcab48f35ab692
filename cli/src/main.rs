//! Command-line front end: generate, compile, and time a partitioned
//! reduction benchmark for one unroll factor.

use std::path::Path;
use std::process;

use clap::Parser;
use snafu::Snafu;
use splitsum_codegen::{c, model};
use splitsum_runtime::{BenchReport, CompiledBenchmark};

/// Exploit instruction-level parallelism by unrolling a reduction loop.
#[derive(Parser)]
#[command(name = "splitsum")]
struct Cli {
    /// How many independent partitions to unroll the reduction into
    /// (a power of two, at most the fixed array size).
    partitions: u64,
}

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(transparent)]
    Codegen { source: splitsum_codegen::Error },

    #[snafu(transparent)]
    Runtime { source: splitsum_runtime::Error },
}

fn run(partitions: u64) -> Result<(), Error> {
    println!("generating reduction benchmark for {partitions} partitions");

    // Host-side equivalence check before anything touches the toolchain.
    model::verify_equivalence(partitions)?;
    let program = c::render(partitions)?;

    let bench = CompiledBenchmark::compile(&program, Path::new("."))?;
    let stdout = bench.run()?;
    print!("{stdout}");

    let report = BenchReport::parse(&stdout)?;
    tracing::info!(partitions, speedup = report.speedup(), "benchmark complete");

    Ok(())
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.partitions) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
