//! Property-based tests for timbre-analysis.
//!
//! Checks detector robustness on arbitrary magnitude arrays and the shape
//! invariants of extracted and synthesized output, using proptest for
//! randomized input generation.

use proptest::prelude::*;
use timbre_analysis::{
    Error, HarmonicSynthesizer, OverflowPolicy, Signal, detect_peaks, extract_timbre,
    frequency_axis,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The detector never panics on finite non-negative magnitudes, and any
    /// peak it confirms lies in the positive half with a non-zero magnitude.
    #[test]
    fn detector_total_on_finite_input(
        mags in prop::collection::vec(0.0f32..1000.0f32, 16..512),
        window in 1usize..64,
    ) {
        let axis = frequency_axis(mags.len(), 48000.0);
        match detect_peaks(&axis, &mags, window) {
            Ok(detection) => {
                prop_assert!(!detection.is_empty());
                for peak in &detection.peaks {
                    prop_assert!(peak.index < mags.len() / 2);
                    prop_assert!(peak.magnitude > 0.0);
                    prop_assert_eq!(peak.frequency, axis[peak.index]);
                }
                let indices = detection.indices();
                prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
                prop_assert!(detection.fundamental >= 0.0);
            }
            Err(Error::NoPeaksFound | Error::InvalidWindow { .. }) => {}
            Err(other) => prop_assert!(false, "unexpected error {other:?}"),
        }
    }

    /// Synthesized output keeps the input length and stays finite for any
    /// coefficient vector and any tone pitch.
    #[test]
    fn synthesis_preserves_length(
        coefficients in prop::collection::vec(0.0f32..2.0f32, 0..64),
        freq in 500.0f32..4000.0f32,
        len in 256usize..4096,
    ) {
        let pure = Signal::sine(16000.0, len, freq, 0.8, 0.0).unwrap();
        let out = HarmonicSynthesizer::new()
            .with_overflow_policy(OverflowPolicy::Drop)
            .apply_coefficients(&pure, &coefficients)
            .unwrap();
        prop_assert_eq!(out.len(), len);
        prop_assert!(out.samples().iter().all(|s| s.is_finite()));
    }

    /// Extracted timbres are gap-free: index 0 is exactly 1.0 and every
    /// coefficient is finite and non-negative.
    #[test]
    fn extracted_timbre_is_dense(
        second in 0.0f32..1.0f32,
        third in 0.0f32..1.0f32,
    ) {
        let rate = 30000.0f32;
        let samples: Vec<f32> = (0..30000)
            .map(|i| {
                let t = f64::from(i) / f64::from(rate);
                let x = (std::f64::consts::TAU * 440.0 * t).sin()
                    + f64::from(second) * (std::f64::consts::TAU * 880.0 * t).sin()
                    + f64::from(third) * (std::f64::consts::TAU * 1320.0 * t).sin();
                x as f32
            })
            .collect();
        let signal = Signal::new(samples, rate).unwrap();

        let timbre = extract_timbre(&signal).unwrap();
        prop_assert_eq!(timbre.coefficients()[0], 1.0);
        prop_assert!(timbre.len() <= 3);
        prop_assert!(timbre.coefficients().iter().all(|c| c.is_finite() && *c >= 0.0));
    }
}
