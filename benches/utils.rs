use std::fs::File;

use pprof::flamegraph::{Direction, Options};

/// Sampling frequency of the profiler, in Hz
const FREQUENCY: i32 = 1_000;

/// Writes a flamegraph of everything that ran while it was alive.
pub struct PProfGuard {
    path: &'static str,
    guard: pprof::ProfilerGuard<'static>,
}

impl PProfGuard {
    #[must_use]
    pub fn new(path: &'static str) -> Self {
        let guard = pprof::ProfilerGuardBuilder::default()
            .frequency(FREQUENCY)
            .build()
            .unwrap();
        Self { path, guard }
    }
}

impl Drop for PProfGuard {
    fn drop(&mut self) {
        let Ok(report) = self.guard.report().build() else {
            return;
        };
        let file = File::create(self.path).unwrap();
        let mut options = Options::default();
        options.direction = Direction::Inverted;
        options.flame_chart = false;
        report.flamegraph_with_options(file, &mut options).unwrap();
    }
}
