use std::hint::black_box;
use std::time::Duration;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::SamplingMode;
use criterion::criterion_group;
use criterion::criterion_main;
use sssp::Distance;
use sssp::INF;
use sssp::IndexedMinHeap;
use sssp::dijkstra;
use sssp::generator::GraphCase;
use sssp::generator::generate_case;

const SIZES: [usize; 3] = [2_048, 8_192, 32_768];

fn apply_runtime(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    size: usize,
) {
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(120));
    if size <= 8_192 {
        group.sampling_mode(SamplingMode::Auto);
        group.measurement_time(Duration::from_millis(220));
    } else {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(360));
    }
}

fn bench_dijkstra(c: &mut Criterion) {
    for case in GraphCase::ALL {
        let mut group = c.benchmark_group(format!("dijkstra/{}", case.label()));

        for &size in &SIZES {
            apply_runtime(&mut group, size);
            let seed = 0x5EED_2026 ^ ((size as u64) << 7) ^ (case as u64);
            let input = generate_case(case, size, seed);

            group.bench_function(BenchmarkId::new("indexed_binary", size), |bencher| {
                bencher.iter(|| {
                    let paths = dijkstra(&input.graph, input.source).expect("source in range");
                    black_box(paths);
                });
            });
        }

        group.finish();
    }
}

fn bench_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_heap");
    for &size in &SIZES {
        apply_runtime(&mut group, size);
        group.bench_function(BenchmarkId::new("insert_decrease_drain", size), |bencher| {
            bencher.iter(|| {
                let mut heap = IndexedMinHeap::new(size);
                for v in 0..size {
                    heap.insert(v, INF).expect("within capacity");
                }
                for v in (0..size).step_by(3) {
                    heap.decrease_key(v, (v * 7 % 1_013) as Distance).expect("present");
                }
                while let Some(entry) = heap.extract_min() {
                    black_box(entry);
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dijkstra, bench_heap);
criterion_main!(benches);
