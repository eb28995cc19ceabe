//! Shared CLI helpers used across multiple commands.

use anyhow::Context;
use clap::Args;
use std::path::Path;
use timbre_analysis::{Signal, Timbre};
use timbre_config::{Settings, TimbreProfile, find_profile, get_factory_profile};
use timbre_io::read_wav;

/// Pure tone parameters shared by `generate` and `apply`.
#[derive(Args, Debug, Clone)]
pub struct ToneArgs {
    /// Frequency in Hz
    #[arg(long, default_value = "440.0")]
    pub freq: f32,

    /// Duration in milliseconds
    #[arg(long, default_value = "1000.0")]
    pub duration_ms: f32,

    /// Sample rate in Hz
    #[arg(long, default_value = "30000")]
    pub sample_rate: u32,

    /// Peak amplitude (0-1)
    #[arg(long, default_value = "1.0")]
    pub amplitude: f32,

    /// Initial phase in radians
    #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
    pub phase: f32,
}

impl ToneArgs {
    /// Build the described sine tone.
    pub fn signal(&self) -> anyhow::Result<Signal> {
        let rate = self.sample_rate as f32;
        let num_samples = Signal::samples_for_duration(rate, self.duration_ms);
        if num_samples == 0 {
            anyhow::bail!(
                "Duration of {} ms at {} Hz yields no samples",
                self.duration_ms,
                self.sample_rate
            );
        }
        Ok(Signal::sine(
            rate,
            num_samples,
            self.freq,
            self.amplitude,
            self.phase,
        )?)
    }
}

/// Load settings, applying a command-line window size override.
pub fn load_settings(window_size: Option<usize>) -> anyhow::Result<Settings> {
    let mut settings = Settings::load_default().context("Failed to load settings")?;
    if let Some(window_size) = window_size {
        settings.analysis.window_size = window_size;
        settings.validate()?;
    }
    Ok(settings)
}

/// Read a WAV file with the path in the error context.
pub fn read_signal(path: &Path) -> anyhow::Result<Signal> {
    read_wav(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn is_wav(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"))
}

/// Resolve a timbre from a profile name, a profile file, or a WAV recording.
///
/// Searches in this order:
/// 1. WAV file (the timbre is extracted with the current settings)
/// 2. Factory profiles (by name)
/// 3. User profiles or a TOML path
///
/// Returns a display label with the timbre.
pub fn load_timbre(name: &str, settings: &Settings) -> anyhow::Result<(String, Timbre)> {
    let path = Path::new(name);
    if is_wav(path) && path.is_file() {
        let signal = read_signal(path)?;
        let timbre = settings
            .extractor()
            .extract(&signal)
            .with_context(|| format!("Failed to extract timbre from {}", path.display()))?;
        return Ok((path.display().to_string(), timbre));
    }

    if let Some(profile) = get_factory_profile(name) {
        return Ok((profile.name.clone(), profile.timbre()));
    }

    if let Some(path) = find_profile(name) {
        let profile = TimbreProfile::load(&path)?;
        return Ok((profile.name.clone(), profile.timbre()));
    }

    anyhow::bail!(
        "Timbre '{}' not found. Use 'timbre profiles list' to see available profiles, or pass a WAV file.",
        name
    )
}

/// Render a coefficient vector as an aligned table.
pub fn print_coefficients(timbre: &Timbre, fundamental_hz: Option<f32>) {
    println!("  {:>8}  {:>10}  {:>11}", "Harmonic", "Freq (Hz)", "Coefficient");
    println!("  {:>8}  {:>10}  {:>11}", "--------", "---------", "-----------");
    for (order, coefficient) in timbre.harmonics() {
        let freq = fundamental_hz
            .map(|f0| format!("{:.1}", f0 * order as f32))
            .unwrap_or_else(|| "-".to_string());
        println!("  {:>8}  {:>10}  {:>11.4}", order, freq, coefficient);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tone(freq: f32, duration_ms: f32, sample_rate: u32) -> ToneArgs {
        ToneArgs {
            freq,
            duration_ms,
            sample_rate,
            amplitude: 0.5,
            phase: 0.0,
        }
    }

    #[test]
    fn tone_args_build_expected_length() {
        let signal = tone(440.0, 100.0, 30000).signal().unwrap();
        assert_eq!(signal.len(), 3000);
        assert_eq!(signal.sample_rate(), 30000.0);
        assert!(signal.peak_amplitude() <= 0.5 + 1e-6);
    }

    #[test]
    fn zero_duration_is_rejected() {
        assert!(tone(440.0, 0.0, 30000).signal().is_err());
    }

    #[test]
    fn factory_profile_resolves() {
        let (label, timbre) = load_timbre("clarinet", &Settings::default()).unwrap();
        assert_eq!(label, "Clarinet");
        assert_eq!(timbre.harmonic(3), Some(0.333333));
    }

    #[test]
    fn unknown_timbre_fails() {
        let err = load_timbre("no_such_timbre_98765", &Settings::default()).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn wav_extension_is_case_insensitive() {
        assert!(is_wav(Path::new("a.WAV")));
        assert!(is_wav(Path::new("dir/b.wav")));
        assert!(!is_wav(Path::new("c.toml")));
    }
}
