//! # Measurement Model
//!
//! Height and weight as supplied at the boundary. Input fields may be empty,
//! non-numeric, zero or negative; this module separates "nothing entered yet"
//! from "entered but unusable".

use crate::error::{EngineError, InputError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl Measurement {
    pub fn new(height_cm: f64, weight_kg: f64) -> Self {
        Self {
            height_cm,
            weight_kg,
        }
    }

    /// Builds a measurement from raw text fields.
    ///
    /// Returns `Ok(None)` when either field is empty, meaning no computation
    /// should be attempted. Text that is present but not a number is an error.
    /// Range checks are left to [`Measurement::validate`].
    pub fn from_input(height: &str, weight: &str) -> Result<Option<Self>, InputError> {
        let height: &str = height.trim();
        let weight: &str = weight.trim();

        if height.is_empty() || weight.is_empty() {
            return Ok(None);
        }

        let height_cm: f64 = parse_field("height", height)?;
        let weight_kg: f64 = parse_field("weight", weight)?;

        Ok(Some(Self::new(height_cm, weight_kg)))
    }

    /// Both values must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), EngineError> {
        check_positive("height", self.height_cm)?;
        check_positive("weight", self.weight_kg)
    }

    pub fn height_m(&self) -> f64 {
        self.height_cm / 100.0
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<f64, InputError> {
    raw.parse::<f64>().map_err(|_| InputError::NotANumber {
        field,
        value: raw.to_string(),
    })
}

fn check_positive(field: &'static str, value: f64) -> Result<(), EngineError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidMeasurement { field, value })
    }
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

    #[test]
    fn test_from_input_parses_numbers() {
        let m = Measurement::from_input("170", " 65.5 ").unwrap();
        assert_eq!(m, Some(Measurement::new(170.0, 65.5)));
    }

    #[test]
    fn test_from_input_missing_field_is_none() {
        assert_eq!(Measurement::from_input("", "65"), Ok(None));
        assert_eq!(Measurement::from_input("170", "   "), Ok(None));
        assert_eq!(Measurement::from_input("", ""), Ok(None));
    }

    #[test]
    fn test_from_input_rejects_text() {
        let err = Measurement::from_input("tall", "65").unwrap_err();
        assert_eq!(
            err,
            InputError::NotANumber {
                field: "height",
                value: "tall".to_string()
            }
        );
        assert_eq!(err.to_string(), "invalid height: 'tall' is not a number");

        assert!(matches!(
            Measurement::from_input("170", "65kg"),
            Err(InputError::NotANumber { field: "weight", .. })
        ));
    }

    #[test]
    fn test_from_input_keeps_degenerate_values_for_validation() {
        // Zero and negative values parse fine; validation rejects them later.
        let m = Measurement::from_input("0", "-3").unwrap().unwrap();
        assert_eq!(m, Measurement::new(0.0, -3.0));
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_validate() {
        assert!(Measurement::new(170.0, 65.0).validate().is_ok());

        assert_eq!(
            Measurement::new(0.0, 65.0).validate(),
            Err(EngineError::InvalidMeasurement {
                field: "height",
                value: 0.0
            })
        );
        assert!(matches!(
            Measurement::new(170.0, -1.0).validate(),
            Err(EngineError::InvalidMeasurement { field: "weight", .. })
        ));
        assert!(Measurement::new(f64::NAN, 65.0).validate().is_err());
        assert!(Measurement::new(170.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_height_m() {
        assert_eq!(Measurement::new(150.0, 50.0).height_m(), 1.5);
    }
}
