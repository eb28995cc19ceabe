//! Factory timbre profiles bundled with the timbre library.
//!
//! These profiles are always available without external files. They model
//! classic harmonic series and serve as starting points for resynthesis.

use crate::TimbreProfile;

/// Array of factory profile names for external access.
pub static FACTORY_PROFILE_NAMES: &[&str] = &["pure", "clarinet", "sawtooth", "organ"];

/// TOML content for factory profiles, embedded at compile time.
static FACTORY_PROFILES_TOML: &[(&str, &str)] = &[
    ("pure", PURE_PROFILE),
    ("clarinet", CLARINET_PROFILE),
    ("sawtooth", SAWTOOTH_PROFILE),
    ("organ", ORGAN_PROFILE),
];

/// Fundamental only.
const PURE_PROFILE: &str = r#"
name = "Pure"
description = "Fundamental only, leaves the tone unchanged"
coefficients = [1.0]
"#;

/// Odd harmonics falling off as 1/n.
const CLARINET_PROFILE: &str = r#"
name = "Clarinet"
description = "Odd harmonics at 1/n, hollow square-like tone"
coefficients = [1.0, 0.0, 0.333333, 0.0, 0.2, 0.0, 0.142857, 0.0, 0.111111]
"#;

/// Every harmonic falling off as 1/n.
const SAWTOOTH_PROFILE: &str = r#"
name = "Sawtooth"
description = "All harmonics at 1/n, bright and buzzy"
coefficients = [1.0, 0.5, 0.333333, 0.25, 0.2, 0.166667, 0.142857, 0.125, 0.111111, 0.1]
"#;

/// Octave drawbars.
const ORGAN_PROFILE: &str = r#"
name = "Organ"
description = "Stacked octave drawbars"
coefficients = [1.0, 0.8, 0.0, 0.6, 0.0, 0.0, 0.0, 0.4]
"#;

/// Get all factory profiles.
///
/// # Example
///
/// ```rust
/// use timbre_config::factory_profiles;
///
/// for profile in factory_profiles() {
///     println!("{}: {} harmonics", profile.name, profile.len());
/// }
/// ```
pub fn factory_profiles() -> Vec<TimbreProfile> {
    FACTORY_PROFILES_TOML
        .iter()
        .filter_map(|(_, toml)| TimbreProfile::from_toml(toml).ok())
        .collect()
}

/// Get a factory profile by name.
///
/// Matches either the internal identifier or the display name,
/// case-insensitively.
///
/// # Example
///
/// ```rust
/// use timbre_config::get_factory_profile;
///
/// let profile = get_factory_profile("Clarinet").unwrap();
/// assert_eq!(profile.coefficients[1], 0.0);
/// ```
pub fn get_factory_profile(name: &str) -> Option<TimbreProfile> {
    let name_lower = name.to_lowercase();

    for (profile_name, toml) in FACTORY_PROFILES_TOML {
        if profile_name.to_lowercase() == name_lower {
            return TimbreProfile::from_toml(toml).ok();
        }
    }

    factory_profiles()
        .into_iter()
        .find(|profile| profile.name.to_lowercase() == name_lower)
}

/// Get the internal identifiers of all factory profiles.
pub fn factory_profile_names() -> Vec<&'static str> {
    FACTORY_PROFILES_TOML.iter().map(|(name, _)| *name).collect()
}

/// Check if a name refers to a factory profile (case-insensitive).
///
/// ```rust
/// use timbre_config::is_factory_profile;
///
/// assert!(is_factory_profile("organ"));
/// assert!(is_factory_profile("ORGAN"));
/// assert!(!is_factory_profile("my_violin"));
/// ```
pub fn is_factory_profile(name: &str) -> bool {
    get_factory_profile(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_factory_profiles_parse() {
        for (name, toml) in FACTORY_PROFILES_TOML {
            let profile = TimbreProfile::from_toml(toml)
                .unwrap_or_else(|e| panic!("factory profile '{name}' failed: {e}"));
            assert_eq!(profile.coefficients[0], 1.0);
        }
        assert_eq!(factory_profiles().len(), FACTORY_PROFILE_NAMES.len());
    }

    #[test]
    fn test_names_match_table() {
        assert_eq!(factory_profile_names(), FACTORY_PROFILE_NAMES.to_vec());
    }

    #[test]
    fn test_get_by_id_and_display_name() {
        assert_eq!(get_factory_profile("sawtooth").unwrap().name, "Sawtooth");
        assert_eq!(get_factory_profile("SAWTOOTH").unwrap().name, "Sawtooth");
        assert!(get_factory_profile("kazoo").is_none());
    }

    #[test]
    fn test_clarinet_has_only_odd_harmonics() {
        let clarinet = get_factory_profile("clarinet").unwrap();
        for (i, c) in clarinet.coefficients.iter().enumerate() {
            let order = i + 1;
            if order % 2 == 0 {
                assert_eq!(*c, 0.0, "even harmonic {order} should be silent");
            } else {
                assert!((c - 1.0 / order as f32).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_sawtooth_falls_off_as_reciprocal() {
        let saw = get_factory_profile("sawtooth").unwrap();
        assert_eq!(saw.len(), 10);
        for (i, c) in saw.coefficients.iter().enumerate() {
            assert!((c - 1.0 / (i + 1) as f32).abs() < 1e-5);
        }
    }

    #[test]
    fn test_pure_is_identity() {
        assert_eq!(get_factory_profile("pure").unwrap().coefficients, vec![1.0]);
    }
}
