//! Sliding-window spectral peak detection
//!
//! The detector looks for spectral lobes that rise out of silence and fall
//! back into it. After a global noise gate (`max * noise_floor_ratio`), a
//! window of `window_size` bins slides over the non-negative half of the
//! spectrum one bin at a time:
//!
//! - while the window maximum keeps rising, the strongest bin so far is the
//!   current candidate;
//! - once the maximum has dropped below the candidate *and* the whole window
//!   is gated silence, the candidate is confirmed as a peak and the search
//!   restarts.
//!
//! Requiring a fully silent trailing window makes the detector immune to
//! jitter around a lobe's crest, but harmonics must be separated by more than
//! `window_size` silent bins to be resolved individually.
//!
//! The window maximum is maintained with a monotonic deque, so a full scan is
//! a single O(N) pass with no per-step allocation.

use crate::error::{Error, Result};
use crate::spectrum::Spectrum;
use std::collections::VecDeque;

/// Default sliding-window width in bins
pub const DEFAULT_WINDOW_SIZE: usize = 300;

/// Default noise gate, relative to the spectrum maximum
pub const DEFAULT_NOISE_FLOOR_RATIO: f32 = 1.0e-3;

/// A confirmed spectral peak
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Frequency of the peak bin in Hz
    pub frequency: f32,
    /// Index of the peak bin in the magnitude array
    pub index: usize,
    /// Magnitude of the peak bin
    pub magnitude: f32,
}

/// Result of a peak scan
#[derive(Debug, Clone, PartialEq)]
pub struct PeakDetection {
    /// Confirmed peaks in emission order (ascending bin index)
    pub peaks: Vec<Peak>,
    /// Smallest absolute peak frequency in Hz
    pub fundamental: f32,
}

impl PeakDetection {
    /// Peak frequencies in emission order
    pub fn frequencies(&self) -> Vec<f32> {
        self.peaks.iter().map(|p| p.frequency).collect()
    }

    /// Peak bin indices in emission order
    pub fn indices(&self) -> Vec<usize> {
        self.peaks.iter().map(|p| p.index).collect()
    }

    /// The peak holding the fundamental frequency
    pub fn fundamental_peak(&self) -> Option<&Peak> {
        self.peaks
            .iter()
            .min_by(|a, b| a.frequency.abs().total_cmp(&b.frequency.abs()))
    }

    /// Number of confirmed peaks
    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    /// Whether no peak was confirmed (never true for a successful scan)
    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }
}

/// Sliding-window peak detector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakDetector {
    window_size: usize,
    noise_floor_ratio: f32,
}

impl Default for PeakDetector {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            noise_floor_ratio: DEFAULT_NOISE_FLOOR_RATIO,
        }
    }
}

impl PeakDetector {
    /// Create a detector with the default window (300 bins) and noise gate (1/1000)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sliding-window width in bins
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the noise gate relative to the spectrum maximum
    pub fn with_noise_floor_ratio(mut self, ratio: f32) -> Self {
        self.noise_floor_ratio = ratio;
        self
    }

    /// Sliding-window width in bins
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Noise gate relative to the spectrum maximum
    pub fn noise_floor_ratio(&self) -> f32 {
        self.noise_floor_ratio
    }

    /// Detect peaks in a two-sided spectrum
    pub fn detect_spectrum(&self, spectrum: &Spectrum) -> Result<PeakDetection> {
        self.detect(spectrum.frequencies(), spectrum.magnitudes())
    }

    /// Detect peaks given a two-sided frequency axis and magnitude array
    ///
    /// # Errors
    ///
    /// - [`Error::LengthMismatch`] if the arrays differ in length
    /// - [`Error::InvalidWindow`] if the window is empty or not smaller than
    ///   half the spectrum
    /// - [`Error::NoPeaksFound`] if no lobe was confirmed
    pub fn detect(&self, frequency_axis: &[f32], magnitude: &[f32]) -> Result<PeakDetection> {
        if frequency_axis.len() != magnitude.len() {
            return Err(Error::LengthMismatch {
                frequencies: frequency_axis.len(),
                magnitudes: magnitude.len(),
            });
        }

        let half = magnitude.len() / 2;
        let n = self.window_size;
        if n == 0 || n >= half {
            return Err(Error::InvalidWindow {
                window_size: n,
                half_len: half,
            });
        }

        // Global noise gate over the full spectrum, applied to the positive half only
        let max = magnitude.iter().copied().fold(0.0f32, f32::max);
        let floor = max * self.noise_floor_ratio;
        let gated: Vec<f32> = magnitude[..half]
            .iter()
            .map(|&m| if m < floor { 0.0 } else { m })
            .collect();

        let mut window: VecDeque<usize> = VecDeque::with_capacity(n);
        let mut candidate = (0usize, 0.0f32);
        let mut peaks = Vec::new();

        // Windows start at 0..half - n, so the last one ends at half - 2
        for i in 0..half - 1 {
            while window.back().is_some_and(|&b| gated[b] < gated[i]) {
                window.pop_back();
            }
            window.push_back(i);

            if i + 1 < n {
                continue;
            }
            let start = i + 1 - n;
            while window.front().is_some_and(|&f| f < start) {
                window.pop_front();
            }

            let Some(&argmax) = window.front() else {
                continue;
            };
            let window_max = gated[argmax];

            if window_max > candidate.1 {
                candidate = (argmax, window_max);
            } else if window_max < candidate.1 && window_max == 0.0 {
                peaks.push(Peak {
                    frequency: frequency_axis[candidate.0],
                    index: candidate.0,
                    magnitude: candidate.1,
                });
                candidate = (0, 0.0);
            }
        }

        let fundamental = peaks
            .iter()
            .map(|p| p.frequency.abs())
            .min_by(f32::total_cmp)
            .ok_or(Error::NoPeaksFound)?;

        tracing::debug!(
            peaks = peaks.len(),
            fundamental,
            window_size = n,
            "peak scan complete"
        );

        Ok(PeakDetection { peaks, fundamental })
    }
}

/// Detect peaks with the default noise gate and the given window size
///
/// Returns the confirmed peaks and the fundamental (minimum absolute peak frequency).
pub fn detect_peaks(
    frequency_axis: &[f32],
    magnitude: &[f32],
    window_size: usize,
) -> Result<PeakDetection> {
    PeakDetector::new()
        .with_window_size(window_size)
        .detect(frequency_axis, magnitude)
}
