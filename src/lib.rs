#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub use budget::MemoryBudget;
pub use config::{RaceConfig, DEFAULT_START_SIZE};
pub use contender::*;
pub use error::{Error, Result};
pub use keys::{KeyCache, KeySequence};
pub use schedule::{next_size, Contestant, Scheduler};
pub use workload::{check_sorted, churn, erase_all, insert_all, Runner, WorkloadResult};

mod budget;
pub mod config;
mod contender;
mod error;
mod keys;
pub mod report;
mod schedule;
mod workload;

/// Keys of a size `n` workload are exactly `0..n`.
pub type Key = usize;
