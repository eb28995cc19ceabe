//! Timbre profile file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;
use timbre_analysis::{Timbre, TimbreAnalysis};

use crate::error::ConfigError;

/// A named, saved harmonic coefficient vector.
///
/// Profiles are stored as TOML files. They are produced by analyzing a
/// recording, written by hand, or taken from the factory set, and can be
/// applied to any pure tone.
///
/// # TOML Format
///
/// ```toml
/// name = "Flute"
/// description = "Breathy, few upper partials"
/// source = "flute_a4.wav"
/// sample_rate = 44100
/// fundamental_hz = 440.0
/// coefficients = [1.0, 0.35, 0.12, 0.04]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimbreProfile {
    /// Name of the profile.
    pub name: String,

    /// Optional description of the profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// File the profile was extracted from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Sample rate of the analyzed recording.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<u32>,

    /// Fundamental frequency of the analyzed recording.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fundamental_hz: Option<f32>,

    /// Amplitude of each harmonic relative to the fundamental, starting at
    /// harmonic 1.
    pub coefficients: Vec<f32>,
}

impl TimbreProfile {
    /// Create a profile from a name and coefficient vector.
    pub fn new(name: impl Into<String>, coefficients: Vec<f32>) -> Self {
        Self {
            name: name.into(),
            description: None,
            source: None,
            sample_rate: None,
            fundamental_hz: None,
            coefficients,
        }
    }

    /// Create a profile from the result of analyzing a recording.
    pub fn from_analysis(
        name: impl Into<String>,
        analysis: &TimbreAnalysis,
        sample_rate: f32,
    ) -> Self {
        Self::new(name, analysis.timbre.coefficients().to_vec())
            .with_fundamental(analysis.fundamental_hz)
            .with_sample_rate(sample_rate.round() as u32)
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Record the file the profile was extracted from.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Record the sample rate of the analyzed recording.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = Some(sample_rate);
        self
    }

    /// Record the fundamental frequency of the analyzed recording.
    pub fn with_fundamental(mut self, fundamental_hz: f32) -> Self {
        self.fundamental_hz = Some(fundamental_hz);
        self
    }

    /// Load and validate a profile from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Parse and validate a profile from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let profile: TimbreProfile = toml::from_str(toml_str)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Save the profile to a TOML file, creating parent directories.
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
        tracing::info!(name = %self.name, path = %path.display(), "profile saved");
        Ok(())
    }

    /// Convert the profile to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the coefficient vector.
    ///
    /// A usable profile has at least one coefficient, a fundamental of
    /// exactly 1.0, and only finite non-negative entries.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(&first) = self.coefficients.first() else {
            return Err(ConfigError::invalid_profile(
                &self.name,
                "coefficients are empty",
            ));
        };
        if first != 1.0 {
            return Err(ConfigError::invalid_profile(
                &self.name,
                format!("first coefficient must be 1.0, got {first}"),
            ));
        }
        if let Some((i, c)) = self
            .coefficients
            .iter()
            .enumerate()
            .find(|(_, c)| !c.is_finite() || **c < 0.0)
        {
            return Err(ConfigError::invalid_profile(
                &self.name,
                format!("coefficient {} must be finite and non-negative, got {c}", i + 1),
            ));
        }
        Ok(())
    }

    /// Coefficient vector as a [`Timbre`].
    pub fn timbre(&self) -> Timbre {
        Timbre::from_coefficients(self.coefficients.clone())
    }

    /// Number of harmonics in the profile.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Whether the profile has no coefficients.
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
}
