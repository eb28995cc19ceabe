//! Error types for spectral analysis and resynthesis.

/// Errors produced by the analysis and synthesis pipeline.
///
/// Every variant is terminal for the call that produced it: the pipeline is
/// deterministic, so retrying with the same input cannot succeed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The detection window does not fit inside the positive half of the spectrum.
    #[error("window of {window_size} bins does not fit in a half spectrum of {half_len} bins")]
    InvalidWindow {
        /// Requested window size in bins.
        window_size: usize,
        /// Number of bins in the non-negative half of the spectrum.
        half_len: usize,
    },

    /// Frequency axis and magnitude array are not index-aligned.
    #[error("frequency axis has {frequencies} bins but magnitude has {magnitudes}")]
    LengthMismatch {
        /// Length of the frequency axis.
        frequencies: usize,
        /// Length of the magnitude array.
        magnitudes: usize,
    },

    /// The detector confirmed no peak (silent or fully suppressed spectrum).
    #[error("no spectral peaks found")]
    NoPeaksFound,

    /// No usable fundamental: every peak sits at DC, or the tone has no dominant bin.
    #[error("no fundamental frequency found")]
    NoFundamental,

    /// A harmonic's synthesized bin lies past the Nyquist bin.
    #[error("harmonic {order} maps to bin {bin}, past the Nyquist bin {nyquist}")]
    HarmonicOverflow {
        /// Harmonic order (1 = fundamental).
        order: usize,
        /// Target bin of the harmonic.
        bin: usize,
        /// Highest representable positive-frequency bin.
        nyquist: usize,
    },

    /// A signal was constructed without samples.
    #[error("signal has no samples")]
    EmptySignal,

    /// Sample rate is zero, negative, or not finite.
    #[error("invalid sample rate: {0}")]
    InvalidSampleRate(f32),
}

/// Convenience result type for analysis operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_window_display() {
        let err = Error::InvalidWindow {
            window_size: 300,
            half_len: 128,
        };
        assert_eq!(
            err.to_string(),
            "window of 300 bins does not fit in a half spectrum of 128 bins"
        );
    }

    #[test]
    fn test_harmonic_overflow_display() {
        let err = Error::HarmonicOverflow {
            order: 9,
            bin: 1800,
            nyquist: 1500,
        };
        let msg = err.to_string();
        assert!(msg.contains("harmonic 9"), "got: {msg}");
        assert!(msg.contains("1500"), "got: {msg}");
    }
}
