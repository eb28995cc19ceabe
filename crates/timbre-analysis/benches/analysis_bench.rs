//! Criterion benchmarks for timbre-analysis components
//!
//! Run with: cargo bench -p timbre-analysis

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use timbre_analysis::{
    Fft, HarmonicSynthesizer, PeakDetector, Signal, Spectrum, TimbreExtractor,
};
use std::f64::consts::TAU;

const SAMPLE_RATE: f32 = 30000.0;

/// Generate a tone with four harmonics at 440 Hz
fn generate_harmonic_tone(size: usize) -> Signal {
    let samples = (0..size)
        .map(|i| {
            let t = i as f64 / f64::from(SAMPLE_RATE);
            let f1 = (TAU * 440.0 * t).sin();
            let f2 = 0.5 * (TAU * 880.0 * t).sin();
            let f3 = 0.25 * (TAU * 1320.0 * t).sin();
            let f4 = 0.125 * (TAU * 1760.0 * t).sin();
            ((f1 + f2 + f3 + f4) * 0.5) as f32
        })
        .collect();
    Signal::new(samples, SAMPLE_RATE).unwrap()
}

// ============================================================================
// FFT benchmarks
// ============================================================================

fn bench_fft_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("FFT_Roundtrip");

    let sizes = [3000, 8192, 30000];

    for &size in &sizes {
        let fft = Fft::new(size);
        let input = generate_harmonic_tone(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let spectrum = fft.forward(black_box(input.samples()));
                let result = fft.inverse(&spectrum);
                black_box(result)
            })
        });
    }

    group.finish();
}

// ============================================================================
// Pipeline benchmarks
// ============================================================================

fn bench_peak_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("PeakDetector");

    for &window in &[50usize, 300, 1000] {
        let spectrum = Spectrum::of(&generate_harmonic_tone(30000));
        let detector = PeakDetector::new().with_window_size(window);

        group.bench_with_input(BenchmarkId::from_parameter(window), &window, |b, _| {
            b.iter(|| black_box(detector.detect_spectrum(black_box(&spectrum))))
        });
    }

    group.finish();
}

fn bench_extract_and_apply(c: &mut Criterion) {
    let recorded = generate_harmonic_tone(30000);
    let pure = Signal::sine(SAMPLE_RATE, 30000, 330.0, 0.8, 0.0).unwrap();
    let extractor = TimbreExtractor::new();
    let synth = HarmonicSynthesizer::new();

    c.bench_function("extract_timbre_30000", |b| {
        b.iter(|| black_box(extractor.extract(black_box(&recorded))))
    });

    let timbre = extractor.extract(&recorded).unwrap();
    c.bench_function("apply_timbre_30000", |b| {
        b.iter(|| black_box(synth.apply(black_box(&pure), &timbre)))
    });
}

criterion_group!(
    benches,
    bench_fft_roundtrip,
    bench_peak_detection,
    bench_extract_and_apply,
);

criterion_main!(benches);
