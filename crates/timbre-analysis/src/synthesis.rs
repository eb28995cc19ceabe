//! Harmonic resynthesis
//!
//! The synthesizer takes a pure tone, finds its single dominant bin, and
//! builds a fresh two-sided spectrum with one impulse per harmonic:
//! bin `order * f0_bin` receives `f0_magnitude * coefficient`, mirrored into
//! the negative half so the inverse transform is real-valued. Phases are
//! discarded, so each harmonic comes back as a zero-phase cosine.

use crate::error::{Error, Result};
use crate::fft::Fft;
use crate::signal::Signal;
use crate::spectrum::Spectrum;
use crate::timbre::Timbre;
use rustfft::num_complex::Complex;

/// What to do with harmonics whose bin lies past Nyquist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverflowPolicy {
    /// Skip them silently (logged at debug level)
    #[default]
    Drop,
    /// Fail with [`Error::HarmonicOverflow`]
    Error,
}

/// Applies timbre coefficient vectors to pure tones
#[derive(Debug, Clone, Copy, Default)]
pub struct HarmonicSynthesizer {
    overflow: OverflowPolicy,
}

impl HarmonicSynthesizer {
    /// Create a synthesizer that drops harmonics past Nyquist
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Nyquist overflow policy
    pub fn with_overflow_policy(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Current Nyquist overflow policy
    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Apply a timbre to a pure tone
    pub fn apply(&self, pure_signal: &Signal, timbre: &Timbre) -> Result<Signal> {
        self.apply_coefficients(pure_signal, timbre.coefficients())
    }

    /// Apply a raw coefficient vector to a pure tone
    ///
    /// The output has the same length and sample rate as `pure_signal`.
    ///
    /// # Errors
    ///
    /// - [`Error::NoFundamental`] if the tone is silent or its strongest bin is DC
    /// - [`Error::HarmonicOverflow`] under [`OverflowPolicy::Error`] when a
    ///   harmonic lands past the Nyquist bin
    pub fn apply_coefficients(&self, pure_signal: &Signal, coefficients: &[f32]) -> Result<Signal> {
        let len = pure_signal.len();
        let spectrum = Spectrum::of(pure_signal);

        let (index_ff, amplitude_ff) = spectrum
            .dominant_bin()
            .filter(|&(bin, mag)| bin > 0 && mag > 0.0)
            .ok_or(Error::NoFundamental)?;

        let nyquist = len / 2;
        let mut bins = vec![Complex::new(0.0f32, 0.0); len];

        for (i, &coefficient) in coefficients.iter().enumerate() {
            let order = i + 1;
            let bin = order * index_ff;
            if bin > nyquist {
                match self.overflow {
                    OverflowPolicy::Drop => {
                        tracing::debug!(
                            dropped = coefficients.len() - i,
                            first_order = order,
                            nyquist,
                            "harmonics past Nyquist dropped"
                        );
                        break;
                    }
                    OverflowPolicy::Error => {
                        return Err(Error::HarmonicOverflow {
                            order,
                            bin,
                            nyquist,
                        });
                    }
                }
            }

            let value = Complex::new(amplitude_ff * coefficient, 0.0);
            bins[bin] = value;
            bins[len - bin] = value;
        }

        let samples = Fft::new(len).inverse(&bins);
        Signal::new(samples, pure_signal.sample_rate())
    }
}

/// Apply a coefficient vector to a pure tone, dropping harmonics past Nyquist
pub fn apply_timbre(pure_signal: &Signal, coefficients: &[f32]) -> Result<Signal> {
    HarmonicSynthesizer::new().apply_coefficients(pure_signal, coefficients)
}
