//! Two-sided FFT adapter
//!
//! Analysis and resynthesis both operate on the full spectrum (positive and
//! negative frequency bins), so unlike a real-input FFT this wrapper never
//! truncates to the positive half.

use rustfft::{FftPlanner, num_complex::Complex};
use std::sync::Arc;

/// FFT processor with forward and inverse plans for a fixed size
pub struct Fft {
    fft: Arc<dyn rustfft::Fft<f32>>,
    ifft: Arc<dyn rustfft::Fft<f32>>,
    size: usize,
}

impl Fft {
    /// Create a new FFT processor for the given size
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);
        let ifft = planner.plan_fft_inverse(size);

        Self { fft, ifft, size }
    }

    /// Get FFT size
    pub fn size(&self) -> usize {
        self.size
    }

    /// Perform forward FFT on real input
    ///
    /// Returns all `size` bins. Input is zero-padded or truncated to the FFT size.
    pub fn forward(&self, input: &[f32]) -> Vec<Complex<f32>> {
        let mut buffer: Vec<Complex<f32>> = input
            .iter()
            .take(self.size)
            .map(|&x| Complex::new(x, 0.0))
            .collect();
        buffer.resize(self.size, Complex::new(0.0, 0.0));

        self.fft.process(&mut buffer);
        buffer
    }

    /// Perform inverse FFT on a full two-sided spectrum
    ///
    /// Returns the normalized real part. The spectrum must be conjugate
    /// symmetric for the discarded imaginary part to be negligible.
    pub fn inverse(&self, spectrum: &[Complex<f32>]) -> Vec<f32> {
        let mut buffer = spectrum.to_vec();
        buffer.resize(self.size, Complex::new(0.0, 0.0));

        self.ifft.process(&mut buffer);

        let scale = 1.0 / self.size as f32;
        buffer.iter().map(|c| c.re * scale).collect()
    }
}

/// Frequency of every bin of a `size`-point FFT, in Hz
///
/// Non-negative frequencies come first, followed by the negative ones:
/// `[0, 1, ..., (size-1)/2, -(size/2), ..., -1] * sample_rate / size`.
pub fn frequency_axis(size: usize, sample_rate: f32) -> Vec<f32> {
    if size == 0 {
        return Vec::new();
    }

    let bin_width = f64::from(sample_rate) / size as f64;
    let positive = (size - 1) / 2 + 1;

    (0..size)
        .map(|i| {
            let k = if i < positive {
                i as f64
            } else {
                i as f64 - size as f64
            };
            (k * bin_width) as f32
        })
        .collect()
}

/// Magnitude of each complex bin
pub fn magnitude(spectrum: &[Complex<f32>]) -> Vec<f32> {
    spectrum.iter().map(|c| c.norm()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_fft_roundtrip() {
        let fft = Fft::new(256);

        let input: Vec<f32> = (0..256)
            .map(|i| (2.0 * PI * 10.0 * i as f32 / 256.0).sin())
            .collect();

        let spectrum = fft.forward(&input);
        assert_eq!(spectrum.len(), 256);
        let reconstructed = fft.inverse(&spectrum);

        for (a, b) in input.iter().zip(reconstructed.iter()) {
            assert!((a - b).abs() < 1e-4, "Mismatch: {} vs {}", a, b);
        }
    }

    #[test]
    fn test_forward_is_two_sided() {
        let fft = Fft::new(64);
        let input: Vec<f32> = (0..64)
            .map(|i| (2.0 * PI * 5.0 * i as f32 / 64.0).cos())
            .collect();

        let mags = magnitude(&fft.forward(&input));

        // Energy appears at bin 5 and its mirror 64 - 5
        assert!((mags[5] - 32.0).abs() < 1e-3);
        assert!((mags[59] - 32.0).abs() < 1e-3);
        assert!(mags[6] < 1e-3);
    }

    #[test]
    fn test_frequency_axis_even() {
        let axis = frequency_axis(8, 8.0);
        assert_eq!(axis, vec![0.0, 1.0, 2.0, 3.0, -4.0, -3.0, -2.0, -1.0]);
    }

    #[test]
    fn test_frequency_axis_odd() {
        let axis = frequency_axis(5, 10.0);
        assert_eq!(axis, vec![0.0, 2.0, 4.0, -4.0, -2.0]);
    }

    #[test]
    fn test_frequency_axis_empty() {
        assert!(frequency_axis(0, 44100.0).is_empty());
    }
}
