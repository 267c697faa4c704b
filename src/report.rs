//! The one-line-per-run output format:
//!
//! ```text
//! array   n =        14  t = 0.000000731
//! list    n =     80218  t = insufficient memory
//! ```
use core::fmt::{self, Display, Write};

use crate::{ContainerKind, WorkloadResult};

/// Tick rate of the clock workloads are timed with; `Duration` counts nanoseconds.
pub const CLOCK_TICKS_PER_SECOND: u64 = 1_000_000_000;

/// Decimals needed to print one clock tick as fixed point seconds.
pub const CLOCK_DECIMALS: usize = decimals(CLOCK_TICKS_PER_SECOND);

/// Number of decimals that represent a period of `1 / ticks_per_second`
/// seconds exactly, rounding down for rates that are not powers of ten.
pub const fn decimals(ticks_per_second: u64) -> usize {
    let mut ratio = ticks_per_second;
    let mut decimals = 0;
    while ratio > 1 {
        ratio /= 10;
        decimals += 1;
    }
    decimals
}

/// Everything that is known before the run: `"<kind>  n = <size>  t = "`.
pub fn write_prefix<W: Write>(out: &mut W, kind: ContainerKind, size: usize) -> fmt::Result {
    write!(out, "{:<6}  n = {:>9}  t = ", kind.label(), size)
}

/// The part after `t = `.
pub fn write_outcome<W: Write>(out: &mut W, result: &WorkloadResult) -> fmt::Result {
    if result.is_exhausted() {
        out.write_str("insufficient memory")
    } else {
        write!(out, "{:.*}", CLOCK_DECIMALS, result.elapsed.as_secs_f64())
    }
}

impl Display for WorkloadResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_prefix(f, self.kind, self.size)?;
        write_outcome(f, self)
    }
}
