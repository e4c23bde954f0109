use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use math::dft::ntt::Table;
use math::modulus::prime::Prime;

fn forward_inplace(c: &mut Criterion) {
    fn runner(prime_instance: Prime, nth_root: u64) -> Box<dyn FnMut()> {
        let ntt_table: Table = Table::new(prime_instance, nth_root);
        let mut a: Vec<u64> = (0..nth_root >> 1).collect();
        Box::new(move || ntt_table.forward_inplace(&mut a))
    }

    let mut b: criterion::BenchmarkGroup<'_, criterion::measurement::WallTime> = c.benchmark_group("forward_inplace");
    for log_nth_root in 11..17 {
        let prime_instance: Prime = Prime::new(0x1fffffffffe00001);

        let runners = [("prime", runner(prime_instance, 1 << log_nth_root))];
        for (name, mut runner) in runners {
            let id = BenchmarkId::new(name, 1 << (log_nth_root - 1));
            b.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
        }
    }
}

fn backward_inplace(c: &mut Criterion) {
    fn runner(prime_instance: Prime, nth_root: u64) -> Box<dyn FnMut()> {
        let ntt_table: Table = Table::new(prime_instance, nth_root);
        let mut a: Vec<u64> = (0..nth_root >> 1).collect();
        Box::new(move || ntt_table.backward_inplace(&mut a))
    }

    let mut b: criterion::BenchmarkGroup<'_, criterion::measurement::WallTime> = c.benchmark_group("backward_inplace");
    for log_nth_root in 11..17 {
        let prime_instance: Prime = Prime::new(0x1fffffffffe00001);

        let runners = [("prime", runner(prime_instance, 1 << log_nth_root))];
        for (name, mut runner) in runners {
            let id = BenchmarkId::new(name, 1 << (log_nth_root - 1));
            b.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
        }
    }
}

criterion_group!(benches, forward_inplace, backward_inplace);
criterion_main!(benches);
