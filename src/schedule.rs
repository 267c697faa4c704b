use std::{cmp::Reverse, collections::BinaryHeap, time::Duration};

use crate::{ContainerKind, RaceConfig, Runner, WorkloadResult};

/// A container kind's standing: how long its latest run took at which size.
///
/// Orders by `elapsed` first, so the heap pops the fastest contestant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Contestant {
    pub elapsed: Duration,
    pub kind: ContainerKind,
    pub size: usize,
}

impl From<WorkloadResult> for Contestant {
    fn from(value: WorkloadResult) -> Self {
        Self {
            elapsed: value.elapsed,
            kind: value.kind,
            size: value.size,
        }
    }
}

/// Problem size a contestant advances to after `n`. Never less than `n`.
#[inline(always)]
pub fn next_size(n: usize) -> usize {
    n.checked_mul(13).map_or(usize::MAX, |x| x / 10 + 1)
}

/// The adaptive race.
///
/// Every step reruns the contestant whose latest run was fastest, at the
/// next larger size, so all kinds spend comparable wall-clock time. A run
/// that exhausts memory removes its kind from the race. As an [`Iterator`]
/// it yields one [`WorkloadResult`] per step and ends only when no
/// contestant is left.
#[derive(Debug)]
pub struct Scheduler {
    runner: Runner,
    queue: BinaryHeap<Reverse<Contestant>>,
}

impl Scheduler {
    /// Runs every kind once at `start_size` to seed the queue.
    pub fn new(mut runner: Runner, start_size: usize) -> Self {
        let mut queue = BinaryHeap::with_capacity(ContainerKind::ALL.len());
        for kind in ContainerKind::ALL {
            let result = runner.run(kind, start_size);
            if !result.is_exhausted() {
                queue.push(Reverse(result.into()));
            }
        }

        Self { runner, queue }
    }

    pub fn with_config(config: &RaceConfig) -> Self {
        Self::new(Runner::with_memory_limit(config.memory_limit), config.start_size)
    }

    /// The kind and size the next [`Scheduler::step`] will run.
    pub fn upcoming(&self) -> Option<(ContainerKind, usize)> {
        self.queue
            .peek()
            .map(|Reverse(c)| (c.kind, next_size(c.size)))
    }

    pub fn step(&mut self) -> Option<WorkloadResult> {
        let Reverse(least) = self.queue.pop()?;
        let result = self.runner.run(least.kind, next_size(least.size));
        if result.is_exhausted() {
            tracing::info!(kind = %least.kind, size = result.size, "contestant dropped out");
        } else {
            self.queue.push(Reverse(result.into()));
        }

        Some(result)
    }

    /// Contestants still racing, in no particular order.
    pub fn contestants(&self) -> impl Iterator<Item = &Contestant> {
        self.queue.iter().map(|Reverse(c)| c)
    }

    #[inline(always)]
    pub fn is_finished(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn runner(&self) -> &Runner {
        &self.runner
    }
}

impl Iterator for Scheduler {
    type Item = WorkloadResult;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }
}
