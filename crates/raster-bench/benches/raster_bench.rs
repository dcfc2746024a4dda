//! Benchmarks for raster-rs operations.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use raster_core::{Image, Pixel};
use raster_ops::histogram::{color_correct, Histogram};
use raster_ops::wavelet::{compress, haar_forward, haar_inverse};
use raster_ops::{composite, dither, filter, Operation};

fn test_image(size: usize) -> Image {
    Image::from_fn(size, size, |r, c| {
        Pixel::new(
            ((r * 7 + c * 3) % 256) as f32,
            ((r * 5 + c * 11) % 256) as f32,
            ((r ^ c) % 256) as f32,
        )
    })
}

/// Benchmark convolution kernels.
fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [64, 256, 512].iter() {
        let img = test_image(*size);
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(BenchmarkId::new("blur", size), &img, |b, img| {
            b.iter(|| filter::blur(black_box(img)))
        });

        group.bench_with_input(BenchmarkId::new("sharpen", size), &img, |b, img| {
            b.iter(|| filter::sharpen(black_box(img)))
        });
    }

    group.finish();
}

/// Benchmark the Haar transform and full compression.
fn bench_wavelet(c: &mut Criterion) {
    let mut group = c.benchmark_group("wavelet");

    for side in [64usize, 256, 512].iter() {
        let buf: Vec<f64> = (0..side * side).map(|i| (i % 251) as f64).collect();
        group.throughput(Throughput::Elements((side * side) as u64));

        group.bench_with_input(BenchmarkId::new("haar_round_trip", side), &buf, |b, buf| {
            b.iter(|| {
                let mut work = buf.clone();
                haar_forward(&mut work, *side);
                haar_inverse(&mut work, *side);
                work
            })
        });
    }

    for pct in [10.0f32, 50.0, 90.0] {
        let img = test_image(256);
        group.bench_with_input(BenchmarkId::new("compress_256", pct), &img, |b, img| {
            b.iter(|| compress(black_box(img), pct))
        });
    }

    group.finish();
}

/// Benchmark histogram based operations.
fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");
    let img = test_image(512);
    group.throughput(Throughput::Elements(512 * 512));

    group.bench_function("compute", |b| b.iter(|| Histogram::compute(black_box(&img))));
    group.bench_function("color_correct", |b| b.iter(|| color_correct(black_box(&img))));

    group.finish();
}

/// Benchmark dithering and split view.
fn bench_misc(c: &mut Criterion) {
    let mut group = c.benchmark_group("misc");
    let img = test_image(256);

    group.bench_function("dither_256", |b| b.iter(|| dither::dither(black_box(&img))));
    group.bench_function("split_view_sepia_256", |b| {
        b.iter(|| composite::split_view(black_box(&img), &Operation::Sepia, 50.0))
    });

    group.finish();
}

criterion_group!(benches, bench_filter, bench_wavelet, bench_histogram, bench_misc);
criterion_main!(benches);
