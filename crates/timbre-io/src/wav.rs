//! WAV file reading and writing.

use crate::{Error, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;
use timbre_analysis::Signal;

/// Full-scale value used when encoding 16-bit output.
const I16_SCALE: f32 = 32767.0;

/// WAV audio encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    IeeeFloat,
}

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Audio encoding format.
    pub format: WavFormat,
}

impl WavInfo {
    /// Whether [`read_wav`] can decode a file with this header.
    pub fn is_supported(&self) -> bool {
        self.channels == 1
            && self.format == WavFormat::Pcm
            && matches!(self.bits_per_sample, 8 | 16 | 32)
    }
}

/// Read WAV metadata without loading sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let total_samples = reader.len() as u64; // total across all channels
    let num_frames = total_samples / spec.channels.max(1) as u64;
    let duration_secs = num_frames as f64 / spec.sample_rate as f64;

    let format = match spec.sample_format {
        SampleFormat::Float => WavFormat::IeeeFloat,
        SampleFormat::Int => WavFormat::Pcm,
    };

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs,
        format,
    })
}

/// Normalize one raw PCM sample for the given width.
///
/// 8-bit PCM is unsigned on disk; hound hands it over shifted into the signed
/// range, so it is shifted back before scaling.
fn normalize(raw: i32, bits: u16) -> f32 {
    match bits {
        8 => (raw + 128) as f32 / 127.5 - 1.0,
        16 => raw as f32 / 32767.0,
        _ => (f64::from(raw) / 2_147_483_647.0) as f32,
    }
}

/// Read a mono integer-PCM WAV file into a [`Signal`].
///
/// # Errors
///
/// - [`Error::UnsupportedChannels`] for anything but mono
/// - [`Error::UnsupportedFormat`] for IEEE float files
/// - [`Error::UnsupportedSampleWidth`] for widths other than 8, 16 or 32 bits
/// - [`Error::Signal`] for files without samples or with a zero sample rate
///
/// # Example
/// ```ignore
/// let signal = read_wav("flute.wav")?;
/// println!("Loaded {} samples at {} Hz", signal.len(), signal.sample_rate());
/// ```
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<Signal> {
    let path = path.as_ref();
    let reader = WavReader::open(path)?;
    let spec = reader.spec();

    if spec.channels != 1 {
        return Err(Error::UnsupportedChannels(spec.channels));
    }
    if spec.sample_format == SampleFormat::Float {
        return Err(Error::UnsupportedFormat(format!(
            "{}-bit IEEE float",
            spec.bits_per_sample
        )));
    }
    let bits = spec.bits_per_sample;
    if !matches!(bits, 8 | 16 | 32) {
        return Err(Error::UnsupportedSampleWidth(bits));
    }

    let samples: Vec<f32> = reader
        .into_samples::<i32>()
        .map(|s| s.map(|v| normalize(v, bits)))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    tracing::debug!(
        path = %path.display(),
        samples = samples.len(),
        sample_rate = spec.sample_rate,
        bits,
        "wav decoded"
    );

    Ok(Signal::new(samples, spec.sample_rate as f32)?)
}

/// Write a signal as a mono 16-bit PCM WAV file.
///
/// Samples are clamped to `[-1.0, 1.0]`, scaled by 32767 and truncated toward
/// zero. The sample rate is rounded to the nearest integer Hz.
///
/// # Example
/// ```ignore
/// let tone = Signal::sine(44100.0, 44100, 440.0, 0.8, 0.0)?;
/// write_wav("tone.wav", &tone)?;
/// ```
pub fn write_wav<P: AsRef<Path>>(path: P, signal: &Signal) -> Result<()> {
    let path = path.as_ref();
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: signal.sample_rate().round() as u32,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec)?;

    let mut clipped = 0usize;
    for &sample in signal.samples() {
        if sample.abs() > 1.0 {
            clipped += 1;
        }
        writer.write_sample((sample.clamp(-1.0, 1.0) * I16_SCALE) as i16)?;
    }
    writer.finalize()?;

    if clipped > 0 {
        tracing::warn!(path = %path.display(), clipped, "samples clipped to full scale");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_normalize_widths() {
        assert_eq!(normalize(-128, 8), -1.0);
        assert_eq!(normalize(127, 8), 1.0);
        assert_eq!(normalize(32767, 16), 1.0);
        assert_eq!(normalize(-32767, 16), -1.0);
        assert_eq!(normalize(i32::MAX, 32), 1.0);
        assert_eq!(normalize(0, 32), 0.0);
    }

    #[test]
    fn test_roundtrip_i16() {
        let signal = Signal::sine(44100.0, 1000, 440.0, 0.9, 0.0).unwrap();

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &signal).unwrap();

        let loaded = read_wav(file.path()).unwrap();
        assert_eq!(loaded.sample_rate(), 44100.0);
        assert_eq!(loaded.len(), signal.len());

        for (a, b) in signal.samples().iter().zip(loaded.samples()) {
            assert!((a - b).abs() <= 1.0 / 32767.0 + 1e-6);
        }
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let signal = Signal::new(vec![2.0, -3.0, 0.5], 8000.0).unwrap();

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &signal).unwrap();

        let loaded = read_wav(file.path()).unwrap();
        assert_eq!(loaded.samples()[0], 1.0);
        assert_eq!(loaded.samples()[1], -1.0);
        assert!((loaded.samples()[2] - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_info_reports_header() {
        let signal = Signal::new(vec![0.0; 4410], 44100.0).unwrap();
        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &signal).unwrap();

        let info = read_wav_info(file.path()).unwrap();
        assert_eq!(info.channels, 1);
        assert_eq!(info.sample_rate, 44100);
        assert_eq!(info.bits_per_sample, 16);
        assert_eq!(info.num_frames, 4410);
        assert!((info.duration_secs - 0.1).abs() < 1e-9);
        assert_eq!(info.format, WavFormat::Pcm);
        assert!(info.is_supported());
    }
}
