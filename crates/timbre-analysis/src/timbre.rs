//! Harmonic coefficient extraction
//!
//! A timbre is the vector of harmonic amplitudes relative to the fundamental.
//! Index `i` holds harmonic order `i + 1`, so index 0 is always `1.0`.
//! Harmonics with no detected peak are explicit zeros; the vector has no
//! gaps and ends at the highest harmonic detected.

use crate::error::{Error, Result};
use crate::peaks::{Peak, PeakDetection, PeakDetector};
use crate::signal::Signal;
use crate::spectrum::Spectrum;

/// Harmonic amplitude ratios relative to the fundamental
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timbre {
    coefficients: Vec<f32>,
}

impl Timbre {
    /// Wrap a dense coefficient vector (index 0 = fundamental)
    pub fn from_coefficients(coefficients: Vec<f32>) -> Self {
        Self { coefficients }
    }

    /// Coefficients, index 0 = fundamental
    pub fn coefficients(&self) -> &[f32] {
        &self.coefficients
    }

    /// Coefficient of a harmonic order (1 = fundamental)
    pub fn harmonic(&self, order: usize) -> Option<f32> {
        order
            .checked_sub(1)
            .and_then(|i| self.coefficients.get(i).copied())
    }

    /// Highest harmonic order represented
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Whether the timbre holds no harmonics
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Iterate `(order, coefficient)` pairs, order starting at 1
    pub fn harmonics(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.coefficients
            .iter()
            .enumerate()
            .map(|(i, &c)| (i + 1, c))
    }

    /// Consume the timbre, returning its coefficients
    pub fn into_coefficients(self) -> Vec<f32> {
        self.coefficients
    }
}

impl From<Vec<f32>> for Timbre {
    fn from(coefficients: Vec<f32>) -> Self {
        Self::from_coefficients(coefficients)
    }
}

/// Full result of a timbre analysis
#[derive(Debug, Clone)]
pub struct TimbreAnalysis {
    /// Extracted coefficient vector
    pub timbre: Timbre,
    /// Fundamental frequency in Hz
    pub fundamental_hz: f32,
    /// Bin index of the fundamental in the analyzed spectrum
    pub fundamental_index: usize,
    /// Raw detector output the timbre was derived from
    pub detection: PeakDetection,
}

/// Extracts timbre coefficient vectors from recorded tones
#[derive(Debug, Clone, Copy, Default)]
pub struct TimbreExtractor {
    detector: PeakDetector,
}

impl TimbreExtractor {
    /// Create an extractor with the default peak detector
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific peak detector configuration
    pub fn with_detector(mut self, detector: PeakDetector) -> Self {
        self.detector = detector;
        self
    }

    /// The peak detector in use
    pub fn detector(&self) -> &PeakDetector {
        &self.detector
    }

    /// Extract the coefficient vector of a tone
    pub fn extract(&self, signal: &Signal) -> Result<Timbre> {
        self.analyze(signal).map(|analysis| analysis.timbre)
    }

    /// Extract the coefficient vector along with the fundamental and raw peaks
    ///
    /// The fundamental is the lowest-frequency non-DC peak; it serves both as
    /// the ratio denominator and as harmonic order 1. Each peak maps to order
    /// `round(f / f0)`. When two peaks round to the same order the first
    /// (lower-frequency) one is kept.
    ///
    /// # Errors
    ///
    /// - [`Error::NoPeaksFound`] for a silent spectrum or one without separated lobes
    /// - [`Error::NoFundamental`] if every detected peak sits at DC
    /// - [`Error::InvalidWindow`] if the signal is too short for the detector window
    pub fn analyze(&self, signal: &Signal) -> Result<TimbreAnalysis> {
        let spectrum = Spectrum::of(signal);
        let detection = self.detector.detect_spectrum(&spectrum)?;

        let harmonics: Vec<&Peak> = detection
            .peaks
            .iter()
            .filter(|p| p.frequency > 0.0)
            .collect();

        let fundamental = *harmonics
            .iter()
            .min_by(|a, b| a.frequency.total_cmp(&b.frequency))
            .ok_or(Error::NoFundamental)?;

        let mut coefficients: Vec<f32> = Vec::new();
        for peak in &harmonics {
            let order = ((peak.frequency / fundamental.frequency).round() as usize).max(1);
            if coefficients.len() < order {
                coefficients.resize(order, 0.0);
            }
            let slot = &mut coefficients[order - 1];
            if *slot == 0.0 {
                *slot = peak.magnitude / fundamental.magnitude;
            } else {
                tracing::debug!(
                    order,
                    frequency = peak.frequency,
                    "harmonic order already filled, peak ignored"
                );
            }
        }

        tracing::info!(
            fundamental_hz = fundamental.frequency,
            harmonics = coefficients.len(),
            "timbre extracted"
        );

        Ok(TimbreAnalysis {
            timbre: Timbre::from_coefficients(coefficients),
            fundamental_hz: fundamental.frequency,
            fundamental_index: fundamental.index,
            detection,
        })
    }
}

/// Extract the timbre of a tone with the default detector settings
pub fn extract_timbre(signal: &Signal) -> Result<Timbre> {
    TimbreExtractor::new().extract(signal)
}

/// Extract the timbre of raw samples recorded at `sample_rate` Hz
///
/// # Errors
///
/// [`Error::EmptySignal`] or [`Error::InvalidSampleRate`] for unusable input,
/// otherwise as [`TimbreExtractor::analyze`].
pub fn extract_timbre_from_samples(samples: &[f32], sample_rate: f32) -> Result<Timbre> {
    extract_timbre(&Signal::new(samples.to_vec(), sample_rate)?)
}
