//! Settings and timbre profile management.
//!
//! # Features
//!
//! - **Settings**: TOML file for peak detection and synthesis parameters
//! - **Timbre profiles**: named coefficient vectors saved as TOML
//! - **Factory profiles**: built-in timbres that need no files
//! - **Paths**: platform-specific config and profile directories
//!
//! # Example
//!
//! ```rust,no_run
//! use timbre_config::{Settings, TimbreProfile, user_profiles_dir};
//!
//! // Load settings (TIMBRE_CONFIG, then the user config file, then defaults)
//! let settings = Settings::load_default().unwrap();
//! let extractor = settings.extractor();
//!
//! // Save a profile to the user profiles directory
//! let profile = TimbreProfile::new("Bright", vec![1.0, 0.8, 0.6])
//!     .with_description("Strong upper partials");
//! profile.save(user_profiles_dir().join("bright.toml")).unwrap();
//! ```

mod error;
mod profile;
mod settings;

/// Platform-specific paths for profiles and configuration.
pub mod paths;

/// Factory timbre profiles bundled with the library.
pub mod factory_profiles;

pub use error::ConfigError;
pub use factory_profiles::{
    FACTORY_PROFILE_NAMES, factory_profile_names, factory_profiles, get_factory_profile,
    is_factory_profile,
};
pub use paths::{
    ensure_user_profiles_dir, find_profile, list_user_profiles, profile_name_from_path,
    settings_path, user_config_dir, user_profiles_dir,
};
pub use profile::TimbreProfile;
pub use settings::{AnalysisSettings, CONFIG_ENV, OverflowSetting, Settings, SynthesisSettings};
