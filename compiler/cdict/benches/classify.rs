//! Classification throughput benchmarks.
//!
//! Scans generated C source against the built-in dictionary, once with
//! every span kept and once with whitespace dropped.

use std::hint::black_box;

use cdict::Engine;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Generate N small C functions.
fn generate_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "static int f{i}(int x) {{\n    /* step {i} */\n    x <<= {i} % 3;\n    return printf(\"%d\\n\", x++ + {i});\n}}\n"
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_classify(c: &mut Criterion) {
    let Ok(engine) = Engine::builtin() else {
        return;
    };
    let mut group = c.benchmark_group("classify/throughput");

    for num_functions in [10, 100, 1000] {
        let source = generate_n_functions(num_functions);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("all", num_functions),
            &source,
            |b, src| b.iter(|| black_box(engine.classify(src))),
        );
        group.bench_with_input(
            BenchmarkId::new("significant", num_functions),
            &source,
            |b, src| b.iter(|| black_box(engine.classify_significant(src))),
        );
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let Ok(raw) = cdict_catalog::builtin() else {
        return;
    };
    c.bench_function("engine/build/builtin", |b| {
        b.iter(|| black_box(Engine::new(&raw)));
    });
}

criterion_group!(benches, bench_classify, bench_build);
criterion_main!(benches);
