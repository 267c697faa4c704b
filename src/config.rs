use sysinfo::System;
use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is unset or invalid. Keeps stdout for report lines.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Default size every contender runs at before the race starts.
pub const DEFAULT_START_SIZE: usize = 10;

/// Percentage of the available physical memory a run may use by default.
pub const DEFAULT_MEMORY_SHARE: u64 = 50;

/// Limit used when the available memory cannot be read: 1 GiB.
pub const FALLBACK_MEMORY_LIMIT: usize = 1 << 30;

/// Knobs of the `race` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceConfig {
    pub start_size: usize,
    /// Stop after this many steps, `None` runs until every contestant drops out
    pub iterations: Option<u64>,
    /// Memory budget in bytes of one run, cached key sequences included.
    /// `None` is unlimited.
    pub memory_limit: Option<usize>,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            start_size: DEFAULT_START_SIZE,
            iterations: None,
            memory_limit: Some(default_memory_limit()),
        }
    }
}

/// [`DEFAULT_MEMORY_SHARE`] percent of the memory the system reports as
/// available, or [`FALLBACK_MEMORY_LIMIT`] when it reports nothing.
pub fn default_memory_limit() -> usize {
    let mut sys = System::new();
    sys.refresh_memory();
    let available = match sys.available_memory() {
        0 => sys.total_memory(),
        bytes => bytes,
    };
    if available == 0 {
        tracing::warn!(
            limit = FALLBACK_MEMORY_LIMIT,
            "cannot read available memory, using fallback limit"
        );
        return FALLBACK_MEMORY_LIMIT;
    }

    let share = available / 100 * DEFAULT_MEMORY_SHARE;
    usize::try_from(share).unwrap_or(usize::MAX)
}

/// Parses the command line, exiting with status 1 on a usage error.
///
/// `--help` and `--version` still exit with 0.
pub fn parse_args<P: clap::Parser>() -> P {
    match P::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    }
}

/// Sends `tracing` output to stderr, filtered by `RUST_LOG`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}
