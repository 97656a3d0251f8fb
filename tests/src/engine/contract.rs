#![cfg(test)]
use bmi_common::error::EngineError;
use bmi_common::health::{AgeGroup, BmiCategory, ChildFloor, Measurement};
use bmi_core::engine::{classify, classify_default, compute_bmi, evaluate};

/// The reference measurement from the calculator's help text.
#[test]
fn reference_measurement() {
    let bmi = compute_bmi(&Measurement::new(170.0, 65.0)).unwrap();
    assert_eq!(bmi, 22.49);
}

/// Every band transition lands in the upper band.
#[test]
fn boundaries_belong_to_upper_band() {
    let transitions: [(AgeGroup, f64, BmiCategory, BmiCategory); 10] = [
        (AgeGroup::Adult, 18.5, BmiCategory::Underweight, BmiCategory::Normal),
        (AgeGroup::Adult, 23.0, BmiCategory::Normal, BmiCategory::Overweight),
        (AgeGroup::Adult, 25.0, BmiCategory::Overweight, BmiCategory::Obese),
        (AgeGroup::Adult, 30.0, BmiCategory::Obese, BmiCategory::SeverelyObese),
        (AgeGroup::Senior, 20.0, BmiCategory::Underweight, BmiCategory::Normal),
        (AgeGroup::Senior, 24.0, BmiCategory::Normal, BmiCategory::Overweight),
        (AgeGroup::Senior, 27.0, BmiCategory::Overweight, BmiCategory::Obese),
        (AgeGroup::Senior, 30.0, BmiCategory::Obese, BmiCategory::SeverelyObese),
        (AgeGroup::Child, 21.0, BmiCategory::Normal, BmiCategory::Overweight),
        (AgeGroup::Child, 24.0, BmiCategory::Overweight, BmiCategory::Obese),
    ];

    for (group, boundary, below, above) in transitions {
        assert_eq!(classify_default(boundary - 0.01, group), Some(below), "{group} {boundary}");
        assert_eq!(classify_default(boundary, group), Some(above), "{group} {boundary}");
    }
}

#[test]
fn child_gap_is_configurable() {
    assert_eq!(classify_default(14.99, AgeGroup::Child), None);
    assert_eq!(
        classify(14.99, AgeGroup::Child, ChildFloor::Underweight),
        Some(BmiCategory::Underweight)
    );
    assert_eq!(classify_default(15.0, AgeGroup::Child), Some(BmiCategory::Normal));
}

#[test]
fn child_has_no_severely_obese_band() {
    for bmi in [24.0, 30.0, 45.0, 80.0] {
        assert_eq!(classify_default(bmi, AgeGroup::Child), Some(BmiCategory::Obese));
    }
}

#[test]
fn zero_height_is_rejected_not_propagated() {
    let result = evaluate(
        &Measurement::new(0.0, 65.0),
        AgeGroup::Adult,
        ChildFloor::default(),
    );
    assert!(matches!(
        result,
        Err(EngineError::InvalidMeasurement { field: "height", .. })
    ));
}

#[test]
fn non_finite_bmi_is_never_classified() {
    for group in AgeGroup::ALL {
        for floor in [ChildFloor::Unclassified, ChildFloor::Underweight] {
            assert_eq!(classify(f64::NAN, group, floor), None);
            assert_eq!(classify(f64::INFINITY, group, floor), None);
        }
    }
}

#[test]
fn repeated_calls_are_identical() {
    let m = Measurement::new(182.5, 91.3);
    let first = evaluate(&m, AgeGroup::Senior, ChildFloor::default()).unwrap();
    for _ in 0..10 {
        assert_eq!(evaluate(&m, AgeGroup::Senior, ChildFloor::default()).unwrap(), first);
    }
}
