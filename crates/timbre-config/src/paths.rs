//! Platform-specific paths for profiles and configuration.
//!
//! # Directory Structure
//!
//! - **User config**: `~/.config/timbre/` (Linux), `~/Library/Application Support/timbre/` (macOS), `%APPDATA%\timbre\` (Windows)
//! - **Settings file**: `<user config>/config.toml`
//! - **User profiles**: `<user config>/profiles/`
//!
//! # Example
//!
//! ```rust,no_run
//! use timbre_config::paths;
//!
//! // Find a profile by name or path
//! if let Some(path) = paths::find_profile("violin") {
//!     println!("Found profile at: {:?}", path);
//! }
//! ```

use std::path::{Path, PathBuf};

/// Application name used for directory paths.
const APP_NAME: &str = "timbre";

/// Subdirectory name for profiles.
const PROFILES_SUBDIR: &str = "profiles";

/// Settings file name inside the user config directory.
const SETTINGS_FILE: &str = "config.toml";

/// Returns the user-specific configuration directory.
///
/// Returns a path relative to the working directory if the platform config
/// directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the user-specific profiles directory.
pub fn user_profiles_dir() -> PathBuf {
    user_config_dir().join(PROFILES_SUBDIR)
}

/// Returns the path of the user settings file.
pub fn settings_path() -> PathBuf {
    user_config_dir().join(SETTINGS_FILE)
}

/// Find a profile file by name.
///
/// The name can be a path to a TOML file (absolute or relative), or a
/// profile name with or without the `.toml` extension, which is looked up
/// in the user profiles directory.
pub fn find_profile(name: &str) -> Option<PathBuf> {
    let path = PathBuf::from(name);
    if path.is_file() {
        return Some(path);
    }

    let filename = if name.ends_with(".toml") {
        name.to_string()
    } else {
        format!("{name}.toml")
    };

    let user_path = user_profiles_dir().join(filename);
    user_path.is_file().then_some(user_path)
}

/// Ensure the user profiles directory exists.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_user_profiles_dir() -> Result<PathBuf, crate::ConfigError> {
    let dir = user_profiles_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| crate::ConfigError::create_dir(&dir, e))?;
    }

    Ok(dir)
}

/// List all profile files in the user profiles directory, sorted by path.
///
/// Returns an empty vector if the directory doesn't exist or can't be read.
pub fn list_user_profiles() -> Vec<PathBuf> {
    list_profiles_in_dir(&user_profiles_dir())
}

fn list_profiles_in_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut profiles: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    profiles.sort();
    profiles
}

/// Get the profile name from a file path (the file stem).
///
/// ```rust
/// use timbre_config::paths::profile_name_from_path;
/// use std::path::Path;
///
/// let name = profile_name_from_path(Path::new("/path/to/violin.toml"));
/// assert_eq!(name, Some("violin".to_string()));
/// ```
pub fn profile_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(ToString::to_string)
}
