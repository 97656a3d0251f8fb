//! The BMI engine.
//!
//! Pure, synchronous and free of shared state, so every function here can be
//! called concurrently from any number of threads.
//!
//! `bmi = weight_kg / (height_cm / 100)^2`, reported with two decimals.

pub mod thresholds;

use bmi_common::error::EngineError;
use bmi_common::health::{AgeGroup, BmiCategory, BmiResult, ChildFloor, Measurement};
use tracing::debug;

/// Computes the unrounded BMI.
///
/// Zero, negative or non-finite inputs are rejected before dividing. Inputs
/// that pass validation but still overflow (a height of a few nanometres)
/// are rejected with [`EngineError::NonFinite`].
pub fn raw_bmi(measurement: &Measurement) -> Result<f64, EngineError> {
    measurement.validate()?;

    let height_m: f64 = measurement.height_m();
    let bmi: f64 = measurement.weight_kg / (height_m * height_m);

    if !bmi.is_finite() {
        return Err(EngineError::NonFinite(bmi));
    }
    Ok(bmi)
}

/// Computes the BMI rounded to two decimals.
pub fn compute_bmi(measurement: &Measurement) -> Result<f64, EngineError> {
    raw_bmi(measurement).map(round_to_hundredths)
}

/// Rounds half away from zero at the second decimal.
///
/// Values too large to scale are returned as-is.
pub fn round_to_hundredths(value: f64) -> f64 {
    let scaled: f64 = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

/// Maps a BMI onto the category band of `age_group`.
///
/// Bands are lower-inclusive and upper-exclusive. Returns `None` when no band
/// applies, which includes every non-finite input.
pub fn classify(bmi: f64, age_group: AgeGroup, child_floor: ChildFloor) -> Option<BmiCategory> {
    if !bmi.is_finite() {
        return None;
    }
    thresholds::table(age_group).classify(bmi, child_floor)
}

/// [`classify`] with the default child floor, which leaves a child BMI below
/// 15 unclassified.
pub fn classify_default(bmi: f64, age_group: AgeGroup) -> Option<BmiCategory> {
    classify(bmi, age_group, ChildFloor::default())
}

/// Computes and classifies a measurement in one step.
///
/// The category is decided on the unrounded value; the reported value is
/// rounded. A BMI of 22.996 therefore reads `23.00` but stays `Normal` for
/// an adult.
pub fn evaluate(
    measurement: &Measurement,
    age_group: AgeGroup,
    child_floor: ChildFloor,
) -> Result<BmiResult, EngineError> {
    let raw: f64 = raw_bmi(measurement)?;
    let result = BmiResult {
        value: round_to_hundredths(raw),
        category: classify(raw, age_group, child_floor),
    };

    debug!(
        height_cm = measurement.height_cm,
        weight_kg = measurement.weight_kg,
        %age_group,
        bmi = result.value,
        category = ?result.category,
        "evaluated measurement"
    );

    Ok(result)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use AgeGroup::{Adult, Child, Senior};
    use BmiCategory::*;

    #[test]
    fn test_compute_bmi_reference_value() {
        let bmi = compute_bmi(&Measurement::new(170.0, 65.0)).unwrap();
        assert_eq!(bmi, 22.49);
    }

    #[test]
    fn test_raw_bmi_unrounded() {
        let bmi = raw_bmi(&Measurement::new(170.0, 65.0)).unwrap();
        assert!((bmi - 22.491_349_480_968_857).abs() < 1e-9);
    }

    #[test]
    fn test_compute_bmi_zero_height_is_rejected() {
        let err = compute_bmi(&Measurement::new(0.0, 65.0)).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidMeasurement {
                field: "height",
                value: 0.0
            }
        );
    }

    #[test]
    fn test_compute_bmi_negative_and_nan_rejected() {
        assert!(compute_bmi(&Measurement::new(-170.0, 65.0)).is_err());
        assert!(compute_bmi(&Measurement::new(170.0, 0.0)).is_err());
        assert!(compute_bmi(&Measurement::new(f64::NAN, 65.0)).is_err());
    }

    #[test]
    fn test_compute_bmi_overflow_is_non_finite() {
        let err = compute_bmi(&Measurement::new(1e-200, 70.0)).unwrap_err();
        assert!(matches!(err, EngineError::NonFinite(v) if v.is_infinite()));
    }

    #[test]
    fn test_round_to_hundredths() {
        assert_eq!(round_to_hundredths(22.491_349), 22.49);
        assert_eq!(round_to_hundredths(22.499), 22.5);
        assert_eq!(round_to_hundredths(0.125), 0.13);
        assert_eq!(round_to_hundredths(-0.125), -0.13);
        assert_eq!(round_to_hundredths(f64::MAX), f64::MAX);
    }

    #[test]
    fn test_classify_adult_boundaries() {
        assert_eq!(classify_default(18.49, Adult), Some(Underweight));
        assert_eq!(classify_default(18.5, Adult), Some(Normal));
        assert_eq!(classify_default(22.99, Adult), Some(Normal));
        assert_eq!(classify_default(23.0, Adult), Some(Overweight));
        assert_eq!(classify_default(24.99, Adult), Some(Overweight));
        assert_eq!(classify_default(25.0, Adult), Some(Obese));
        assert_eq!(classify_default(29.99, Adult), Some(Obese));
        assert_eq!(classify_default(30.0, Adult), Some(SeverelyObese));
    }

    #[test]
    fn test_classify_senior_boundaries() {
        assert_eq!(classify_default(19.99, Senior), Some(Underweight));
        assert_eq!(classify_default(20.0, Senior), Some(Normal));
        assert_eq!(classify_default(24.0, Senior), Some(Overweight));
        assert_eq!(classify_default(27.0, Senior), Some(Obese));
        assert_eq!(classify_default(29.99, Senior), Some(Obese));
        assert_eq!(classify_default(30.0, Senior), Some(SeverelyObese));
    }

    #[test]
    fn test_classify_child_bands() {
        assert_eq!(classify_default(15.0, Child), Some(Normal));
        assert_eq!(classify_default(20.99, Child), Some(Normal));
        assert_eq!(classify_default(21.0, Child), Some(Overweight));
        assert_eq!(classify_default(24.0, Child), Some(Obese));
        assert_eq!(classify_default(1000.0, Child), Some(Obese));
    }

    #[test]
    fn test_classify_child_floor() {
        assert_eq!(classify_default(14.99, Child), None);
        assert_eq!(classify(14.99, Child, ChildFloor::Unclassified), None);
        assert_eq!(classify(14.99, Child, ChildFloor::Underweight), Some(Underweight));
        // The floor policy never touches the other tables.
        assert_eq!(classify(14.99, Adult, ChildFloor::Unclassified), Some(Underweight));
    }

    #[test]
    fn test_classify_non_finite() {
        for group in AgeGroup::ALL {
            assert_eq!(classify_default(f64::NAN, group), None);
            assert_eq!(classify_default(f64::INFINITY, group), None);
            assert_eq!(classify_default(f64::NEG_INFINITY, group), None);
        }
    }

    #[test]
    fn test_evaluate_classifies_unrounded_value() {
        let result = evaluate(&Measurement::new(170.0, 65.0), Adult, ChildFloor::default()).unwrap();
        assert_eq!(result.value, 22.49);
        assert_eq!(result.category, Some(Normal));

        // 66.459 / 1.7^2 = 22.9962..., displayed as 23.0 but still Normal.
        let result = evaluate(&Measurement::new(170.0, 66.459), Adult, ChildFloor::default()).unwrap();
        assert_eq!(result.value, 23.0);
        assert_eq!(result.category, Some(Normal));
    }

    #[test]
    fn test_evaluate_child_gap_is_unclassified() {
        // 20 / 1.2^2 = 13.89
        let m = Measurement::new(120.0, 20.0);
        let result = evaluate(&m, Child, ChildFloor::Unclassified).unwrap();
        assert_eq!(result.value, 13.89);
        assert!(!result.is_classified());

        let result = evaluate(&m, Child, ChildFloor::Underweight).unwrap();
        assert_eq!(result.category, Some(Underweight));
    }

    #[test]
    fn test_evaluate_rejects_invalid() {
        assert!(evaluate(&Measurement::new(0.0, 0.0), Adult, ChildFloor::default()).is_err());
    }

    proptest! {
        #[test]
        fn prop_compute_matches_formula(height in 50.0f64..250.0, weight in 2.0f64..300.0) {
            let expected = weight / ((height / 100.0) * (height / 100.0));
            let bmi = compute_bmi(&Measurement::new(height, weight)).unwrap();
            prop_assert!((bmi - expected).abs() <= 0.005 + 1e-9);
        }

        #[test]
        fn prop_evaluate_is_idempotent(height in 50.0f64..250.0, weight in 2.0f64..300.0, idx in 0usize..3) {
            let m = Measurement::new(height, weight);
            let group = AgeGroup::ALL[idx];
            let first = evaluate(&m, group, ChildFloor::default()).unwrap();
            let second = evaluate(&m, group, ChildFloor::default()).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_adult_and_senior_always_classified(bmi in 0.0f64..1000.0) {
            prop_assert!(classify_default(bmi, Adult).is_some());
            prop_assert!(classify_default(bmi, Senior).is_some());
        }

        #[test]
        fn prop_child_never_severely_obese(bmi in 0.0f64..1000.0) {
            prop_assert_ne!(classify(bmi, Child, ChildFloor::Underweight), Some(SeverelyObese));
        }
    }
}
