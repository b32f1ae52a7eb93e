//! Performance benchmarks for oxihuff
//!
//! Covers compression and extraction throughput across data patterns and
//! sizes, plus the cost of tree construction on its own.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxihuff::{CodeTable, ExtractOptions, build_tree, compress, extract_with};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Uniform data - a single byte value, one-bit codes
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Random data - flat distribution, 8-bit codes
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Text-like data
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! \
                     Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            let chunk_size = remaining.min(text.len());
            data.extend_from_slice(&text[..chunk_size]);
        }
        data
    }

    /// Skewed data - geometric-like distribution over a few symbols
    pub fn skewed(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x0FEDCBA987654321;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            let r = (seed >> 40) as u32;
            data.push(r.trailing_zeros().min(15) as u8);
        }
        data
    }
}

/// Standard data sizes for benchmarking
mod data_sizes {
    pub const SMALL: usize = 1024; // 1 KB
    pub const MEDIUM: usize = 64 * 1024; // 64 KB
    pub const LARGE: usize = 1024 * 1024; // 1 MB
}

fn patterns() -> [(&'static str, PatternGenerator); 4] {
    [
        ("uniform", test_data::uniform as PatternGenerator),
        ("random", test_data::random as PatternGenerator),
        ("text", test_data::text_like as PatternGenerator),
        ("skewed", test_data::skewed as PatternGenerator),
    ]
}

/// Benchmark compression speed for different data types
fn bench_compression_data_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_data_types");
    let size = data_sizes::MEDIUM;

    for (pattern_name, generator) in patterns() {
        let data = generator(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(pattern_name),
            &data,
            |b, data| {
                b.iter(|| {
                    let compressed = compress(black_box(data)).unwrap();
                    black_box(compressed);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark compression speed for different input sizes
fn bench_compression_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_sizes");

    let sizes = [
        ("1KB", data_sizes::SMALL),
        ("64KB", data_sizes::MEDIUM),
        ("1MB", data_sizes::LARGE),
    ];

    for (size_name, size) in sizes {
        let data = test_data::text_like(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size_name), &data, |b, data| {
            b.iter(|| {
                let compressed = compress(black_box(data)).unwrap();
                black_box(compressed);
            });
        });
    }

    group.finish();
}

/// Benchmark extraction speed for different data types
fn bench_extraction_data_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction_data_types");
    let size = data_sizes::MEDIUM;

    for (pattern_name, generator) in patterns() {
        let compressed = compress(&generator(size)).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(pattern_name),
            &compressed,
            |b, compressed| {
                b.iter(|| {
                    let decompressed =
                        extract_with(black_box(compressed), &ExtractOptions::UNLIMITED).unwrap();
                    black_box(decompressed);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark extraction speed for different sizes
fn bench_extraction_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction_sizes");

    let sizes = [
        ("1KB", data_sizes::SMALL),
        ("64KB", data_sizes::MEDIUM),
        ("1MB", data_sizes::LARGE),
    ];

    for (size_name, size) in sizes {
        let compressed = compress(&test_data::text_like(size)).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size_name),
            &compressed,
            |b, compressed| {
                b.iter(|| {
                    let decompressed =
                        extract_with(black_box(compressed), &ExtractOptions::UNLIMITED).unwrap();
                    black_box(decompressed);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark tree construction and code assignment alone
fn bench_tree_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_building");
    let size = data_sizes::MEDIUM;

    for (pattern_name, generator) in patterns() {
        let data = generator(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(pattern_name),
            &data,
            |b, data| {
                b.iter(|| {
                    let tree = build_tree(black_box(data)).unwrap();
                    let codes = CodeTable::from_tree(&tree);
                    black_box(codes);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark compression ratios
fn bench_compression_ratio(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_ratio");
    group.sample_size(10);
    let size = data_sizes::MEDIUM;

    for (pattern_name, generator) in patterns() {
        let data = generator(size);

        group.bench_with_input(
            BenchmarkId::from_parameter(pattern_name),
            &data,
            |b, data| {
                b.iter(|| {
                    let compressed = compress(black_box(data)).unwrap();
                    let ratio = data.len() as f64 / compressed.len() as f64;
                    black_box((compressed, ratio));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compression_data_types,
    bench_compression_sizes,
    bench_extraction_data_types,
    bench_extraction_sizes,
    bench_tree_building,
    bench_compression_ratio,
);
criterion_main!(benches);
