mod race_log;
use container_race::{
    next_size, ArenaList, Contender, ContainerKind, Key, KeyCache, KeySequence, MemoryBudget,
    RaceConfig, Runner, Scheduler, SortedArray, TreeSet, DEFAULT_START_SIZE,
};
use ctor::ctor;
use race_log::RaceLog;

#[ctor]
fn init_color_backtrace() {
    color_backtrace::install();
}

mod test_workload {
    use super::*;

    fn insert_then_erase<C: Contender>(n: usize) {
        let mut cache = KeyCache::new();
        let keys = cache.sequences_for(n);
        let mut budget = MemoryBudget::unlimited();
        let mut container = C::with_capacity(n).unwrap();

        container_race::insert_all(&mut container, keys.insert_order(), &mut budget).unwrap();
        assert_eq!(container.len(), n);
        assert_eq!(container.iter().collect::<Vec<_>>(), (0..n).collect::<Vec<Key>>());
        assert!(container_race::check_sorted(&container));
        assert_eq!(budget.used(), n * C::BYTES_PER_KEY);

        container_race::erase_all(&mut container, keys.erase_order(), &mut budget);
        assert!(container.is_empty());
        assert_eq!(budget.used(), 0);
    }

    #[test]
    fn every_kind_every_size() {
        for n in [0, 1, 10, 1000] {
            insert_then_erase::<SortedArray>(n);
            insert_then_erase::<TreeSet>(n);
            insert_then_erase::<ArenaList>(n);
        }
    }

    #[test]
    fn run_reports_sorted() {
        let mut runner = Runner::new();
        for n in [0, 1, 10, 1000] {
            for kind in ContainerKind::ALL {
                let result = runner.run(kind, n);
                assert_eq!(result.kind, kind);
                assert_eq!(result.size, n);
                assert!(result.sorted);
                assert!(!result.is_exhausted());
            }
        }
        assert_eq!(runner.keys().len(), 4);
    }

    #[test]
    fn five_keys() {
        let mut cache = KeyCache::new();
        let keys = cache.sequences_for(5).clone();
        let mut sorted = keys.insert_order().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
        assert_eq!(&keys, cache.sequences_for(5));

        let mut arr = SortedArray::with_capacity(5).unwrap();
        let mut budget = MemoryBudget::unlimited();
        container_race::insert_all(&mut arr, keys.insert_order(), &mut budget).unwrap();
        assert_eq!(arr.as_slice(), &[0, 1, 2, 3, 4]);
        container_race::erase_all(&mut arr, keys.erase_order(), &mut budget);
        assert!(arr.is_empty());
    }

    #[test]
    fn exhaustion_on_every_kind() {
        // room for the keys, not for the container
        let limit = KeySequence::footprint(1000) + 64;
        for kind in ContainerKind::ALL {
            let mut runner = Runner::with_memory_limit(Some(limit));
            let result = runner.run(kind, 1000);
            assert!(result.is_exhausted(), "{kind} should run out of memory");
            assert_eq!(result.kind, kind);
            assert_eq!(result.size, 1000);
            assert!(runner.keys().contains(1000));
        }
    }
}

mod test_scheduler {
    use super::*;

    /// Replays `n -> next_size(n)` from the start size.
    fn assert_growth(sizes: &[usize]) {
        let mut expected = DEFAULT_START_SIZE;
        for &size in sizes {
            expected = next_size(expected);
            assert_eq!(size, expected);
        }
    }

    #[test]
    fn every_kind_advances() {
        let scheduler = Scheduler::with_config(&RaceConfig::default());
        let log: RaceLog = scheduler.take(60).collect();
        assert_eq!(log.total(), 60);
        for kind in ContainerKind::ALL {
            let sizes = log.sizes(kind);
            assert!(!sizes.is_empty(), "{kind} never advanced");
            assert!(sizes.windows(2).all(|w| w[0] < w[1]));
            assert_growth(&sizes);
        }
    }

    #[test]
    fn exhausted_contestants_drop_out() {
        let config = RaceConfig {
            memory_limit: Some(4096),
            ..RaceConfig::default()
        };
        // every kind eventually outgrows the budget, so the race ends by itself
        let log: RaceLog = Scheduler::with_config(&config).collect();
        assert_eq!(log.kinds().count(), 3);
        for kind in log.kinds() {
            let runs = log.runs(kind);
            let (last, rest) = runs.split_last().unwrap();
            assert!(last.is_exhausted());
            assert!(rest.iter().all(|r| !r.is_exhausted() && r.sorted));
            assert_growth(&log.sizes(kind));
        }
    }

    #[test]
    fn default_config_is_bounded() {
        let config = RaceConfig::default();
        assert!(config.memory_limit.is_some());
        assert_eq!(
            Scheduler::with_config(&config).runner().memory_limit(),
            config.memory_limit
        );
    }

    #[test]
    fn fastest_goes_next() {
        let mut scheduler = Scheduler::new(Runner::new(), 100);
        for _ in 0..20 {
            let fastest = *scheduler.contestants().min().unwrap();
            let result = scheduler.step().unwrap();
            assert_eq!(result.kind, fastest.kind);
            assert_eq!(result.size, next_size(fastest.size));
        }
    }
}
