//! Criterion benchmarks for mvd-search.
//!
//! - Term position resolution over a generated multi-version document
//! - Integer array packing and unpacking at each byte width

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use mvd_search::codec::IntArrayCodec;
use mvd_search::mvd::{self, Fragment};
use mvd_search::search::PositionResolver;
use std::hint::black_box;

/// Generate a fragment sequence with `versions` witnesses that share most
/// words and differ on every fifth one.
fn generate_fragments(words: usize, versions: usize) -> Vec<Fragment> {
    let vocabulary = [
        "in", "the", "beginning", "was", "word", "and", "with", "god", "light", "darkness",
        "shineth", "comprehended", "not", "same",
    ];

    let mut fragments = Vec::new();
    for i in 0..words {
        let word = vocabulary[(i * 7) % vocabulary.len()];
        if i % 5 == 4 {
            for v in 0..versions {
                let variant = vocabulary[(i + v * 3) % vocabulary.len()];
                fragments.push(Fragment::with_versions(format!("{word}{variant}"), [v]));
            }
        } else {
            fragments.push(Fragment::with_versions(word, 0..versions));
        }
        fragments.push(Fragment::with_versions(" ", 0..versions));
    }
    fragments
}

/// Generate `count` pseudo-random values of at most `width` bytes.
fn generate_values(count: usize, width: u32) -> Vec<i32> {
    let limit = 1i64 << (8 * width - 1);
    (0..count as i64)
        .map(|i| ((i * 2_654_435_761) % (2 * limit) - limit) as i32)
        .collect()
}

/// Benchmark term position resolution.
fn bench_position_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("position_resolution");

    let fragments = generate_fragments(2000, 8);
    let resolver = PositionResolver::default();
    let total = mvd::total_len(&fragments);

    group.bench_function("resolve_single_term", |b| {
        b.iter(|| {
            let result = resolver.resolve(black_box(&fragments), 8, 0, 0);
            black_box(result)
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("resolve_at_100_offsets", |b| {
        b.iter(|| {
            for global in (0..total).step_by(total / 100).take(100) {
                let result = resolver.resolve_at(black_box(&fragments), global);
                let _ = black_box(result);
            }
        })
    });

    group.finish();
}

/// Benchmark integer array packing.
fn bench_int_array_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("int_array_codec");
    let codec = IntArrayCodec::default();

    for width in 1..=4 {
        let values = generate_values(10_000, width);
        let compressed = codec.encode(&values);

        group.throughput(Throughput::Elements(values.len() as u64));
        group.bench_function(format!("encode_{width}_bytes"), |b| {
            b.iter(|| black_box(codec.encode(black_box(&values))))
        });
        group.bench_function(format!("decode_{width}_bytes"), |b| {
            b.iter(|| black_box(codec.decode(black_box(compressed.words()))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_position_resolution, bench_int_array_codec);

criterion_main!(benches);
