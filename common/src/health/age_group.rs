use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

/// Selects which threshold table classifies a BMI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum AgeGroup {
    Child,
    #[default]
    Adult,
    /// 65 and older.
    Senior,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 3] = [AgeGroup::Child, AgeGroup::Adult, AgeGroup::Senior];

    /// Stable identifier, also used as the catalog key suffix.
    pub fn key(&self) -> &'static str {
        match self {
            AgeGroup::Child => "child",
            AgeGroup::Adult => "adult",
            AgeGroup::Senior => "senior",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AgeGroup {
    type Err = InputError;

    /// Parses `child`, `adult` or `senior` (or their first letter), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "child" | "c" => Ok(AgeGroup::Child),
            "adult" | "a" => Ok(AgeGroup::Adult),
            "senior" | "s" => Ok(AgeGroup::Senior),
            _ => Err(InputError::UnknownAgeGroup(s.to_string())),
        }
    }
}

/// How a child BMI below the lowest charted band (15) is treated.
///
/// The child table has no lower band by default, so such values stay
/// unclassified. `Underweight` closes that gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChildFloor {
    #[default]
    Unclassified,
    Underweight,
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
