//! Criterion benchmarks for clavier-synth components
//!
//! Run with: cargo bench -p clavier-synth

use clavier_synth::{MixPolicy, generate, mix_with};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const SAMPLE_RATE: f64 = 44100.0;
const DURATIONS: &[f64] = &[0.1, 0.5, 1.0];

// ============================================================================
// Tone generation
// ============================================================================

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Generate");

    for &duration in DURATIONS {
        group.bench_with_input(
            BenchmarkId::new("Sine440", duration),
            &duration,
            |b, &d| b.iter(|| black_box(generate(black_box(440.0), d, SAMPLE_RATE))),
        );
    }

    group.finish();
}

// ============================================================================
// Chord mixing
// ============================================================================

fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("Mix");
    let chord = [261.63, 329.63, 392.0, 493.88, 587.33, 698.46, 783.99, 880.0];

    for notes in [1usize, 3, 8] {
        for policy in [MixPolicy::Sum, MixPolicy::Normalize] {
            group.bench_with_input(
                BenchmarkId::new(policy.name(), notes),
                &notes,
                |b, &n| b.iter(|| black_box(mix_with(&chord[..n], 1.0, SAMPLE_RATE, policy))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_generate, bench_mix);
criterion_main!(benches);
