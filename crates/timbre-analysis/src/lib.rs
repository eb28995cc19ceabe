//! Timbre Analysis - harmonic fingerprinting and resynthesis of musical tones
//!
//! This crate characterizes the harmonic content of a recorded tone and
//! re-applies it to an arbitrary pure tone:
//!
//! - [`fft`] - Two-sided FFT adapter and frequency axis generation
//! - [`signal`] - Immutable sample buffer paired with its sample rate
//! - [`spectrum`] - Two-sided magnitude spectrum with aligned frequency axis
//! - [`peaks`] - Sliding-window spectral peak detection
//! - [`timbre`] - Harmonic coefficient extraction
//! - [`synthesis`] - Harmonic injection and inverse-FFT resynthesis
//!
//! ## Example Workflow
//!
//! ```rust
//! use timbre_analysis::{Signal, TimbreExtractor, HarmonicSynthesizer};
//!
//! // A 440 Hz tone with a strong second harmonic
//! let rate = 30000.0;
//! let samples: Vec<f32> = (0..30000)
//!     .map(|i| {
//!         let t = f64::from(i) / f64::from(rate);
//!         let x = (std::f64::consts::TAU * 440.0 * t).sin()
//!             + 0.5 * (std::f64::consts::TAU * 880.0 * t).sin();
//!         x as f32
//!     })
//!     .collect();
//! let recorded = Signal::new(samples, rate).unwrap();
//!
//! // 1. Fingerprint the recorded tone
//! let timbre = TimbreExtractor::new().extract(&recorded).unwrap();
//! assert_eq!(timbre.len(), 2);
//!
//! // 2. Re-apply the fingerprint to a pure tone at another pitch
//! let pure = Signal::sine(rate, 30000, 220.0, 0.5, 0.0).unwrap();
//! let voiced = HarmonicSynthesizer::new().apply(&pure, &timbre).unwrap();
//! assert_eq!(voiced.len(), pure.len());
//! ```

pub mod error;
pub mod fft;
pub mod peaks;
pub mod signal;
pub mod spectrum;
pub mod synthesis;
pub mod timbre;

// Re-export main types
pub use error::{Error, Result};
pub use fft::{Fft, frequency_axis, magnitude};
pub use peaks::{
    DEFAULT_NOISE_FLOOR_RATIO, DEFAULT_WINDOW_SIZE, Peak, PeakDetection, PeakDetector,
    detect_peaks,
};
pub use signal::Signal;
pub use spectrum::Spectrum;
pub use synthesis::{HarmonicSynthesizer, OverflowPolicy, apply_timbre};
pub use timbre::{
    Timbre, TimbreAnalysis, TimbreExtractor, extract_timbre, extract_timbre_from_samples,
};
