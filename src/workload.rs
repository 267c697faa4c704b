use std::time::{Duration, Instant};

use itertools::Itertools;

use crate::{
    config::default_memory_limit, ArenaList, Contender, ContainerKind, KeyCache, KeySequence, MemoryBudget, Result,
    SortedArray, TreeSet,
};

/// Outcome of one workload run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadResult {
    pub kind: ContainerKind,
    pub size: usize,
    /// [`WorkloadResult::EXHAUSTED`] if the run ran out of memory
    pub elapsed: Duration,
    /// false if the traversal after the insert phase was out of order
    pub sorted: bool,
}

impl WorkloadResult {
    /// Sentinel duration of a run that ran out of memory.
    pub const EXHAUSTED: Duration = Duration::MAX;

    pub fn exhausted(kind: ContainerKind, size: usize) -> Self {
        Self {
            kind,
            size,
            elapsed: Self::EXHAUSTED,
            sorted: true,
        }
    }

    #[inline(always)]
    pub fn is_exhausted(&self) -> bool {
        self.elapsed == Self::EXHAUSTED
    }
}

/// Runs workloads, owning the key cache and the memory budget they share.
///
/// Every run is charged for the whole key cache, including the sequences it
/// is about to generate, plus what its container stores.
#[derive(Debug)]
pub struct Runner {
    keys: KeyCache,
    budget: MemoryBudget,
}

impl Default for Runner {
    fn default() -> Self {
        Self::with_memory_limit(Some(default_memory_limit()))
    }
}

impl Runner {
    /// Limited to [`default_memory_limit`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unlimited() -> Self {
        Self::with_memory_limit(None)
    }

    pub fn with_memory_limit(limit: Option<usize>) -> Self {
        Self {
            keys: KeyCache::new(),
            budget: MemoryBudget::new(limit),
        }
    }

    pub fn keys(&self) -> &KeyCache {
        &self.keys
    }

    pub fn memory_limit(&self) -> Option<usize> {
        self.budget.limit()
    }

    pub fn run(&mut self, kind: ContainerKind, n: usize) -> WorkloadResult {
        match kind {
            ContainerKind::Array => self.run_with::<SortedArray>(n),
            ContainerKind::Tree => self.run_with::<TreeSet>(n),
            ContainerKind::List => self.run_with::<ArenaList>(n),
        }
    }

    /// Insert every key, check the order, erase every key, and time it.
    ///
    /// Key generation and container construction happen before the clock
    /// starts. Running out of memory yields [`WorkloadResult::exhausted`].
    pub fn run_with<C: Contender>(&mut self, n: usize) -> WorkloadResult {
        // the cache is charged before generating, so a new size cannot abort
        let outcome = match self.budget.charge(self.keys.bytes_with(n)) {
            Ok(()) => timed::<C>(self.keys.sequences_for(n), &mut self.budget),
            Err(err) => Err(err),
        };
        let peak = self.budget.peak();
        self.budget.reset();
        match outcome {
            Ok((elapsed, sorted)) => {
                tracing::debug!(kind = %C::KIND, size = n, ?elapsed, peak, "workload finished");
                WorkloadResult {
                    kind: C::KIND,
                    size: n,
                    elapsed,
                    sorted,
                }
            }
            Err(err) => {
                debug_assert!(err.is_insufficient_memory());
                tracing::warn!(kind = %C::KIND, size = n, %err, "workload ran out of memory");
                WorkloadResult::exhausted(C::KIND, n)
            }
        }
    }
}

fn timed<C: Contender>(keys: &KeySequence, budget: &mut MemoryBudget) -> Result<(Duration, bool)> {
    let mut container = C::with_capacity(keys.len())?;
    let start = Instant::now();
    let sorted = churn(&mut container, keys, budget)?;
    Ok((start.elapsed(), sorted))
}

/// The measured workload. Returns whether the insert phase left the
/// container sorted.
pub fn churn<C: Contender>(
    container: &mut C,
    keys: &KeySequence,
    budget: &mut MemoryBudget,
) -> Result<bool> {
    insert_all(container, keys.insert_order(), budget)?;
    let sorted = check_sorted(container);
    erase_all(container, keys.erase_order(), budget);
    Ok(sorted)
}

pub fn insert_all<C: Contender>(
    container: &mut C,
    keys: &[crate::Key],
    budget: &mut MemoryBudget,
) -> Result<()> {
    for &key in keys {
        budget.charge(C::BYTES_PER_KEY)?;
        let pos = container.locate(key);
        container.insert_at(pos, key)?;
    }

    Ok(())
}

/// Every key must be present.
pub fn erase_all<C: Contender>(container: &mut C, keys: &[crate::Key], budget: &mut MemoryBudget) {
    for &key in keys {
        let pos = container.locate(key);
        let removed = container.remove_at(pos);
        debug_assert_eq!(removed, Some(key));
        budget.release(C::BYTES_PER_KEY);
    }
}

/// Scans adjacent pairs once. An out of order pair is reported but not fatal.
pub fn check_sorted<C: Contender>(container: &C) -> bool {
    match container
        .iter()
        .tuple_windows()
        .find_position(|(a, b)| a > b)
    {
        Some((index, (a, b))) => {
            tracing::error!(kind = %C::KIND, index, a, b, "Oh noes!");
            false
        }
        None => true,
    }
}
