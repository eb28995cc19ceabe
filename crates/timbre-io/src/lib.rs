//! WAV file I/O for timbre analysis.
//!
//! This crate provides:
//!
//! - **Decoding**: [`read_wav`] loads a mono 8, 16 or 32-bit integer PCM file
//!   into a [`Signal`](timbre_analysis::Signal)
//! - **Encoding**: [`write_wav`] saves a signal as mono 16-bit PCM
//! - **Inspection**: [`read_wav_info`] reads the header without decoding samples
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use timbre_analysis::{HarmonicSynthesizer, Signal, TimbreExtractor};
//! use timbre_io::{read_wav, write_wav};
//!
//! let recorded = read_wav("flute.wav")?;
//! let timbre = TimbreExtractor::new().extract(&recorded)?;
//!
//! let pure = Signal::sine(30000.0, 90000, 440.0, 1.0, 0.0)?;
//! let voiced = HarmonicSynthesizer::new().apply(&pure, &timbre)?;
//! write_wav("flute_440.wav", &voiced)?;
//! ```

mod wav;

pub use wav::{WavFormat, WavInfo, read_wav, read_wav_info, write_wav};

/// Error types for WAV I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV container read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Integer PCM width other than 8, 16 or 32 bits.
    #[error("Unsupported sample width: {0} bits (expected 8, 16 or 32)")]
    UnsupportedSampleWidth(u16),

    /// More than one channel.
    #[error("Unsupported channel count: {0} (only mono is supported)")]
    UnsupportedChannels(u16),

    /// Sample encoding other than integer PCM.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// Decoded data does not form a valid signal (empty file, zero sample rate).
    #[error("Invalid signal: {0}")]
    Signal(#[from] timbre_analysis::Error),
}

/// Convenience result type for WAV I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
