//! Two-sided magnitude spectra

use crate::fft::{Fft, frequency_axis, magnitude};
use crate::signal::Signal;

/// Magnitude spectrum with its index-aligned frequency axis
///
/// Both arrays cover all FFT bins: non-negative frequencies first, then the
/// mirrored negative half. A spectrum is derived on demand and never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    frequencies: Vec<f32>,
    magnitudes: Vec<f32>,
    sample_rate: f32,
}

impl Spectrum {
    /// Compute the spectrum of raw samples (rectangular window, FFT size = length)
    pub fn from_samples(samples: &[f32], sample_rate: f32) -> Self {
        let fft = Fft::new(samples.len());
        let magnitudes = magnitude(&fft.forward(samples));

        Self {
            frequencies: frequency_axis(samples.len(), sample_rate),
            magnitudes,
            sample_rate,
        }
    }

    /// Compute the spectrum of a signal
    pub fn of(signal: &Signal) -> Self {
        Self::from_samples(signal.samples(), signal.sample_rate())
    }

    /// Frequency of each bin in Hz
    pub fn frequencies(&self) -> &[f32] {
        &self.frequencies
    }

    /// Magnitude of each bin
    pub fn magnitudes(&self) -> &[f32] {
        &self.magnitudes
    }

    /// Sample rate of the analyzed signal
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Number of bins (equals the analyzed signal length)
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    /// Whether the spectrum has no bins
    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Frequency resolution in Hz
    pub fn bin_width(&self) -> f32 {
        if self.magnitudes.is_empty() {
            0.0
        } else {
            self.sample_rate / self.magnitudes.len() as f32
        }
    }

    /// Number of bins in the non-negative half, `[0, len/2)`
    pub fn half_len(&self) -> usize {
        self.magnitudes.len() / 2
    }

    /// Frequencies of the non-negative half
    pub fn positive_frequencies(&self) -> &[f32] {
        &self.frequencies[..self.half_len()]
    }

    /// Magnitudes of the non-negative half
    pub fn positive_magnitudes(&self) -> &[f32] {
        &self.magnitudes[..self.half_len()]
    }

    /// Strongest bin of the non-negative half as `(index, magnitude)`
    ///
    /// Ties resolve to the lowest index. Returns `None` when the half is empty.
    pub fn dominant_bin(&self) -> Option<(usize, f32)> {
        self.positive_magnitudes()
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best, (i, m)| match best {
                Some((_, best_mag)) if m <= best_mag => best,
                _ => Some((i, m)),
            })
    }

    /// Magnitude of the bin nearest to `freq_hz`, if it is in the non-negative half
    pub fn magnitude_at(&self, freq_hz: f32) -> Option<f32> {
        let width = self.bin_width();
        if width <= 0.0 || freq_hz < 0.0 {
            return None;
        }
        let bin = (freq_hz / width).round() as usize;
        self.positive_magnitudes().get(bin).copied()
    }

    /// Render the non-negative half as CSV (`frequency_hz,magnitude`)
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("frequency_hz,magnitude\n");
        for (freq, mag) in self
            .positive_frequencies()
            .iter()
            .zip(self.positive_magnitudes())
        {
            csv.push_str(&format!("{:.2},{:.6}\n", freq, mag));
        }
        csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_tone_dominant_bin() {
        let signal = Signal::sine(30000.0, 3000, 440.0, 1.0, 0.0).unwrap();
        let spectrum = signal.spectrum();

        assert_eq!(spectrum.len(), 3000);
        assert_eq!(spectrum.half_len(), 1500);
        assert!((spectrum.bin_width() - 10.0).abs() < 1e-6);

        let (bin, mag) = spectrum.dominant_bin().unwrap();
        assert_eq!(bin, 44);
        assert!((spectrum.frequencies()[bin] - 440.0).abs() < 1e-3);
        // A unit sine concentrates N/2 into its bin
        assert!((mag - 1500.0).abs() < 0.5, "magnitude {mag}");
    }

    #[test]
    fn test_mirror_bin_matches() {
        let signal = Signal::sine(30000.0, 3000, 440.0, 1.0, 0.0).unwrap();
        let spectrum = signal.spectrum();
        let mags = spectrum.magnitudes();
        assert!((mags[44] - mags[3000 - 44]).abs() < 1e-2);
        assert!((spectrum.frequencies()[3000 - 44] + 440.0).abs() < 1e-3);
    }

    #[test]
    fn test_dominant_bin_ties_pick_lowest() {
        let spectrum = Spectrum {
            frequencies: vec![0.0, 1.0, 2.0, 3.0, -4.0, -3.0, -2.0, -1.0],
            magnitudes: vec![0.0, 2.0, 2.0, 1.0, 0.0, 1.0, 2.0, 2.0],
            sample_rate: 8.0,
        };
        assert_eq!(spectrum.dominant_bin(), Some((1, 2.0)));
    }

    #[test]
    fn test_single_sample_has_no_positive_half() {
        let spectrum = Spectrum::from_samples(&[1.0], 8000.0);
        assert_eq!(spectrum.half_len(), 0);
        assert_eq!(spectrum.dominant_bin(), None);
    }

    #[test]
    fn test_magnitude_at() {
        let signal = Signal::sine(30000.0, 3000, 880.0, 0.5, 0.0).unwrap();
        let spectrum = signal.spectrum();
        let mag = spectrum.magnitude_at(880.0).unwrap();
        assert!((mag - 750.0).abs() < 0.5);
        assert!(spectrum.magnitude_at(1320.0).unwrap() < 1e-2);
        assert_eq!(spectrum.magnitude_at(20000.0), None);
    }

    #[test]
    fn test_csv_covers_positive_half() {
        let spectrum = Spectrum::from_samples(&[1.0, 0.0, -1.0, 0.0], 4.0);
        let csv = spectrum.to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "frequency_hz,magnitude");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "1.00,2.000000");
    }
}
