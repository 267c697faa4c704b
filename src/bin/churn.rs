use std::process::ExitCode;

use clap::Parser;
use container_race::{
    config::{default_memory_limit, init_logging, parse_args},
    ContainerKind, Runner,
};

/// Time a single insert-all / erase-all workload.
#[derive(Debug, Parser)]
#[command(name = "churn", version, long_about = None)]
struct CliArgs {
    /// Number of keys to insert and erase
    n: usize,

    /// Container to run the workload on
    #[arg(short, long, value_enum, default_value_t = ContainerKind::Array)]
    kind: ContainerKind,

    /// Memory budget of the workload, in bytes [default: half the available memory]
    #[arg(long, value_name = "BYTES")]
    memory_limit: Option<usize>,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = parse_args::<CliArgs>();
    init_logging();

    let limit = args.memory_limit.unwrap_or_else(default_memory_limit);
    let mut runner = Runner::with_memory_limit(Some(limit));
    let result = runner.run(args.kind, args.n);
    println!("{result}");
    if result.is_exhausted() || !result.sorted {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
