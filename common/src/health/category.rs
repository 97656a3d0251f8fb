use std::fmt;

/// Health-status label derived from a BMI value and an age group.
///
/// Variants are declared in ascending order of BMI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
    SeverelyObese,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 5] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
        BmiCategory::SeverelyObese,
    ];

    /// Catalog key suffix, e.g. `bmiStatus.severelyObese`.
    pub fn key(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
            BmiCategory::SeverelyObese => "severelyObese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
            BmiCategory::SeverelyObese => "severely obese",
        };
        f.write_str(label)
    }
}

/// A computed BMI. Only built once the value is known to be finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    /// BMI rounded to two decimals.
    pub value: f64,
    /// `None` when the value falls outside every band of the age group.
    pub category: Option<BmiCategory>,
}

impl BmiResult {
    pub fn is_classified(&self) -> bool {
        self.category.is_some()
    }
}
