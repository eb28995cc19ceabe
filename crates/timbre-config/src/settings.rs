//! Analysis and synthesis settings file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use timbre_analysis::{
    DEFAULT_NOISE_FLOOR_RATIO, DEFAULT_WINDOW_SIZE, HarmonicSynthesizer, OverflowPolicy,
    PeakDetector, TimbreExtractor,
};

use crate::error::ConfigError;
use crate::paths;

/// Environment variable naming an explicit settings file.
pub const CONFIG_ENV: &str = "TIMBRE_CONFIG";

/// Settings for timbre analysis and resynthesis.
///
/// # TOML Format
///
/// ```toml
/// [analysis]
/// window_size = 300
/// noise_floor_ratio = 0.001
///
/// [synthesis]
/// overflow = "drop"
/// ```
///
/// Missing sections and keys fall back to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Peak detection parameters.
    pub analysis: AnalysisSettings,
    /// Resynthesis parameters.
    pub synthesis: SynthesisSettings,
}

/// Peak detection parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Sliding-window width in bins.
    pub window_size: usize,
    /// Noise gate relative to the spectrum maximum.
    pub noise_floor_ratio: f32,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            noise_floor_ratio: DEFAULT_NOISE_FLOOR_RATIO,
        }
    }
}

/// Resynthesis parameters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SynthesisSettings {
    /// Handling of harmonics past Nyquist.
    pub overflow: OverflowSetting,
}

/// Serialized form of [`OverflowPolicy`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OverflowSetting {
    /// Skip harmonics past Nyquist.
    #[default]
    Drop,
    /// Fail on harmonics past Nyquist.
    Error,
}

impl From<OverflowSetting> for OverflowPolicy {
    fn from(setting: OverflowSetting) -> Self {
        match setting {
            OverflowSetting::Drop => OverflowPolicy::Drop,
            OverflowSetting::Error => OverflowPolicy::Error,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file and validate them.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let settings = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Load settings from the first available source.
    ///
    /// 1. The file named by `TIMBRE_CONFIG` (must exist)
    /// 2. `config.toml` in the user config directory (if present)
    /// 3. Built-in defaults
    pub fn load_default() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load(path);
        }

        let path = paths::settings_path();
        if path.is_file() {
            return Self::load(path);
        }

        Ok(Self::default())
    }

    /// Parse and validate settings from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(toml_str)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Convert the settings to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save the settings to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Check every value against its valid range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analysis.window_size == 0 {
            return Err(ConfigError::invalid_setting(
                "analysis.window_size",
                "must be at least 1",
            ));
        }
        let ratio = self.analysis.noise_floor_ratio;
        if !ratio.is_finite() || !(0.0..1.0).contains(&ratio) {
            return Err(ConfigError::invalid_setting(
                "analysis.noise_floor_ratio",
                format!("must be in [0, 1), got {ratio}"),
            ));
        }
        Ok(())
    }

    /// Peak detector configured from these settings.
    pub fn peak_detector(&self) -> PeakDetector {
        PeakDetector::new()
            .with_window_size(self.analysis.window_size)
            .with_noise_floor_ratio(self.analysis.noise_floor_ratio)
    }

    /// Timbre extractor configured from these settings.
    pub fn extractor(&self) -> TimbreExtractor {
        TimbreExtractor::new().with_detector(self.peak_detector())
    }

    /// Harmonic synthesizer configured from these settings.
    pub fn synthesizer(&self) -> HarmonicSynthesizer {
        HarmonicSynthesizer::new().with_overflow_policy(self.synthesis.overflow.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_detector_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.analysis.window_size, 300);
        assert_eq!(settings.analysis.noise_floor_ratio, 0.001);
        assert_eq!(settings.synthesis.overflow, OverflowSetting::Drop);
        assert_eq!(settings.peak_detector(), PeakDetector::new());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings = Settings::from_toml("[analysis]\nwindow_size = 64\n").unwrap();
        assert_eq!(settings.analysis.window_size, 64);
        assert_eq!(settings.analysis.noise_floor_ratio, 0.001);
        assert_eq!(settings.synthesis.overflow, OverflowSetting::Drop);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_overflow_setting_parses() {
        let settings = Settings::from_toml("[synthesis]\noverflow = \"error\"\n").unwrap();
        assert_eq!(settings.synthesis.overflow, OverflowSetting::Error);
        assert_eq!(
            settings.synthesizer().overflow_policy(),
            OverflowPolicy::Error
        );
    }

    #[test]
    fn test_unknown_overflow_rejected() {
        let result = Settings::from_toml("[synthesis]\noverflow = \"wrap\"\n");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_zero_window_rejected() {
        let result = Settings::from_toml("[analysis]\nwindow_size = 0\n");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidSetting { ref key, .. }) if key == "analysis.window_size"
        ));
    }

    #[test]
    fn test_ratio_out_of_range_rejected() {
        let result = Settings::from_toml("[analysis]\nnoise_floor_ratio = 1.5\n");
        assert!(matches!(result, Err(ConfigError::InvalidSetting { .. })));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut settings = Settings::default();
        settings.analysis.window_size = 128;
        settings.synthesis.overflow = OverflowSetting::Error;

        let toml_str = settings.to_toml().unwrap();
        assert!(toml_str.contains("window_size = 128"));
        assert!(toml_str.contains("overflow = \"error\""));
        assert_eq!(Settings::from_toml(&toml_str).unwrap(), settings);
    }

    #[test]
    fn test_extractor_uses_window() {
        let mut settings = Settings::default();
        settings.analysis.window_size = 42;
        assert_eq!(settings.extractor().detector().window_size(), 42);
    }
}
