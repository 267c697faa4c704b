use container_race::{
    churn, ArenaList, Contender, KeySequence, MemoryBudget, SortedArray, TreeSet,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
mod utils;

fn bench_churn<C: Contender>(c: &mut Criterion, sizes: &[usize]) {
    let mut b = c.benchmark_group(format!("{} insert/erase", C::KIND));
    for &n in sizes {
        let keys = KeySequence::generate(n);
        b.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| {
                let mut container = C::with_capacity(keys.len()).unwrap();
                churn(&mut container, keys, &mut MemoryBudget::unlimited()).unwrap()
            });
        });
    }
}

pub fn bench(c: &mut Criterion) {
    let guard = utils::PProfGuard::new("target/contenders.svg");
    bench_churn::<SortedArray>(c, &[1_000, 10_000, 100_000]);
    bench_churn::<TreeSet>(c, &[1_000, 10_000, 100_000]);
    // linear scans make the list quadratic in locate as well
    bench_churn::<ArenaList>(c, &[1_000, 10_000]);
    drop(guard);
}

criterion_group!(benches, bench);
criterion_main!(benches);
