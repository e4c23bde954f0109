use bfv::parameters::{Parameters, ParametersLiteral};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use matmul::evaluator::Execution;
use matmul::generate::generate;
use matmul::grid::{CiphertextMatrix, Matrix};
use matmul::protocol::{Client, Server};
use matmul::reduce::Reduction;
use sampling::source::Source;
use std::hint::black_box;
use std::sync::Arc;

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("homomorphic_matmul");
    group.sample_size(10);

    fn runner(dim: usize, reduction: Reduction, execution: Execution) -> impl FnMut() {
        let params: Arc<Parameters> = Arc::new(Parameters::new(&ParametersLiteral::SMALL).unwrap());
        let mut source: Source = Source::new([0u8; 32]);

        let mut client: Client = Client::new(&params, &mut source);
        let mut server: Server = Server::new(&params, client.public_key(), &mut source)
            .with_reduction(reduction)
            .with_execution(execution);

        let a: Matrix = generate(dim, dim, 100, &mut source).unwrap();
        let b: Matrix = generate(dim, dim, 100, &mut source).unwrap();
        let ca: CiphertextMatrix = client.encrypt(&a).unwrap();
        let cb: CiphertextMatrix = server.encrypt(&b).unwrap();

        move || {
            black_box(server.multiply(&ca, &cb).unwrap());
        }
    }

    for dim in [2, 4] {
        let runners = [
            ("sequential_serial", runner(dim, Reduction::Sequential, Execution::Serial)),
            ("tree_parallel", runner(dim, Reduction::Tree, Execution::Parallel)),
        ];
        for (name, mut runner) in runners {
            let id = BenchmarkId::new(name, format!("{}x{}", dim, dim));
            group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
        }
    }

    group.finish();
}

criterion_group!(benches, bench_multiply);
criterion_main!(benches);
