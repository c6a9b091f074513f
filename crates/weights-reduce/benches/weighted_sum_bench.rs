use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::{Array1, Array2, Axis};
use weights_core::{uniform_weights, weights};
use weights_reduce::{wsum, wsum_axis};

fn bench_flat_wsum(c: &mut Criterion) {
    let mut group = c.benchmark_group("wsum_flat");
    for n in [100usize, 10_000, 1_000_000] {
        let x: Array1<f64> = Array1::from_iter((0..n).map(|i| i as f64));
        let w = weights(&vec![0.5; n]).unwrap();
        let u = uniform_weights::<f64>(n).unwrap();

        group.bench_with_input(BenchmarkId::new("dense", n), &n, |b, _| {
            b.iter(|| wsum(black_box(&x), black_box(&w)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("uniform", n), &n, |b, _| {
            b.iter(|| wsum(black_box(&x), black_box(&u)).unwrap())
        });
    }
    group.finish();
}

fn bench_axis_wsum(c: &mut Criterion) {
    let mut group = c.benchmark_group("wsum_axis");
    for rows in [100usize, 1000] {
        let x = Array2::from_shape_fn((rows, 64), |(i, j)| (i + j) as f64);
        let w = weights(&vec![0.5; rows]).unwrap();
        group.bench_with_input(BenchmarkId::new("rows", rows), &rows, |b, _| {
            b.iter(|| wsum_axis(black_box(&x), black_box(&w), Axis(0)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_flat_wsum, bench_axis_wsum);
criterion_main!(benches);
