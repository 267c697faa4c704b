use std::io::{self, Write as _};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use container_race::{
    config::{default_memory_limit, init_logging, parse_args},
    report, RaceConfig, Scheduler, DEFAULT_START_SIZE,
};

#[derive(Debug, Parser)]
#[command(
    name = "race",
    version,
    about = "Race a sorted array, a balanced tree and a linked list on growing random workloads",
    long_about = None,
    after_help = "Runs until interrupted unless --iterations is given or every contender runs out of memory."
)]
struct CliArgs {
    /// Problem size every contender runs at before the race starts
    #[arg(long, value_name = "N", default_value_t = DEFAULT_START_SIZE)]
    start: usize,

    /// Stop after this many steps
    #[arg(long, value_name = "K")]
    iterations: Option<u64>,

    /// Memory budget of a single workload, in bytes [default: half the available memory]
    #[arg(long, value_name = "BYTES")]
    memory_limit: Option<usize>,
}

impl From<CliArgs> for RaceConfig {
    fn from(args: CliArgs) -> Self {
        RaceConfig {
            start_size: args.start,
            iterations: args.iterations,
            memory_limit: Some(args.memory_limit.unwrap_or_else(default_memory_limit)),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let config: RaceConfig = parse_args::<CliArgs>().into();
    init_logging();
    tracing::debug!(?config, "starting race");

    let mut scheduler = Scheduler::with_config(&config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut line = String::new();
    let mut steps = 0;
    while config.iterations.map_or(true, |limit| steps < limit) {
        let Some((kind, size)) = scheduler.upcoming() else {
            // every contender ran out of memory
            return Ok(ExitCode::FAILURE);
        };

        line.clear();
        report::write_prefix(&mut line, kind, size)?;
        out.write_all(line.as_bytes())?;
        out.flush().context("flushing stdout")?;

        let Some(result) = scheduler.step() else {
            unreachable!("upcoming() returned a contestant");
        };
        line.clear();
        report::write_outcome(&mut line, &result)?;
        writeln!(out, "{line}")?;
        steps += 1;
    }

    Ok(ExitCode::SUCCESS)
}
