//! Immutable sample buffers.

use crate::error::{Error, Result};
use crate::spectrum::Spectrum;
use std::f64::consts::TAU;

/// Mono audio signal: time-ordered samples paired with a sample rate.
///
/// A `Signal` is never empty and always carries a positive, finite sample
/// rate. It is immutable once built; every transform returns a new signal.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    samples: Vec<f32>,
    sample_rate: f32,
}

impl Signal {
    /// Wrap samples recorded at `sample_rate` Hz.
    pub fn new(samples: Vec<f32>, sample_rate: f32) -> Result<Self> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(Error::InvalidSampleRate(sample_rate));
        }
        if samples.is_empty() {
            return Err(Error::EmptySignal);
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Generate a pure sinusoid.
    ///
    /// `amplitude * sin(2π·freq·t + phase)` for `num_samples` samples. The
    /// phase is accumulated in `f64` so long tones stay spectrally clean.
    pub fn sine(
        sample_rate: f32,
        num_samples: usize,
        freq: f32,
        amplitude: f32,
        phase: f32,
    ) -> Result<Self> {
        let rate = f64::from(sample_rate);
        let samples = (0..num_samples)
            .map(|i| {
                let t = i as f64 / rate;
                let x = (TAU * f64::from(freq) * t + f64::from(phase)).sin();
                (f64::from(amplitude) * x) as f32
            })
            .collect();
        Self::new(samples, sample_rate)
    }

    /// Number of samples needed to cover `duration_ms` milliseconds.
    pub fn samples_for_duration(sample_rate: f32, duration_ms: f32) -> usize {
        (f64::from(duration_ms) * f64::from(sample_rate) / 1000.0).max(0.0) as usize
    }

    /// Sample values.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate
    }

    /// Largest absolute sample value.
    pub fn peak_amplitude(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()))
    }

    /// Two-sided magnitude spectrum of the whole signal.
    pub fn spectrum(&self) -> Spectrum {
        Spectrum::from_samples(&self.samples, self.sample_rate)
    }

    /// Consume the signal, returning its samples.
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}
