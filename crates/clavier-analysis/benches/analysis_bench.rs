//! Criterion benchmarks for clavier-analysis components
//!
//! Run with: cargo bench -p clavier-analysis

use clavier_analysis::{SpectrumAnalyzer, Window, fft::Fft};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::f64::consts::TAU;

const SAMPLE_RATE: f64 = 44100.0;

/// Generate a C major triad
fn generate_triad(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| {
            let t = i as f64 / SAMPLE_RATE;
            (TAU * 261.63 * t).sin() + (TAU * 329.63 * t).sin() + (TAU * 392.0 * t).sin()
        })
        .collect()
}

// ============================================================================
// FFT benchmarks
// ============================================================================

fn bench_fft_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("FFT_Forward");

    // Chord lengths are rate * duration, rarely a power of two
    for size in [4096usize, 11025, 22050, 44100] {
        let signal = generate_triad(size);
        let fft = Fft::new(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &signal, |b, s| {
            b.iter(|| black_box(fft.forward(black_box(s))))
        });
    }

    group.finish();
}

// ============================================================================
// Spectrum benchmarks
// ============================================================================

fn bench_spectrum(c: &mut Criterion) {
    let mut group = c.benchmark_group("Spectrum");
    let signal = generate_triad(44100);

    for (name, window) in [("Rectangular", Window::Rectangular), ("Hann", Window::Hann)] {
        let analyzer = SpectrumAnalyzer::new().with_window(window);
        group.bench_function(name, |b| {
            b.iter(|| black_box(analyzer.analyze(black_box(&signal), SAMPLE_RATE)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fft_forward, bench_spectrum);
criterion_main!(benches);
