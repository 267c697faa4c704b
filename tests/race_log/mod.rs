use std::collections::BTreeMap;

use container_race::{ContainerKind, WorkloadResult};

/// Scheduler output grouped by container kind, in the order it was produced.
#[derive(Debug, Default)]
pub struct RaceLog {
    by_kind: BTreeMap<ContainerKind, Vec<WorkloadResult>>,
    total: usize,
}

impl RaceLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: WorkloadResult) {
        self.by_kind.entry(result.kind).or_default().push(result);
        self.total += 1;
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn kinds(&self) -> impl Iterator<Item = ContainerKind> + '_ {
        self.by_kind.keys().copied()
    }

    pub fn runs(&self, kind: ContainerKind) -> &[WorkloadResult] {
        self.by_kind.get(&kind).map(|x| x.as_slice()).unwrap_or(&[])
    }

    pub fn sizes(&self, kind: ContainerKind) -> Vec<usize> {
        self.runs(kind).iter().map(|x| x.size).collect()
    }
}

impl FromIterator<WorkloadResult> for RaceLog {
    fn from_iter<T: IntoIterator<Item = WorkloadResult>>(iter: T) -> Self {
        let mut log = RaceLog::new();
        for result in iter {
            log.record(result);
        }
        log
    }
}
