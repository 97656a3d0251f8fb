//! Per-age-group threshold tables.
//!
//! Each table lists its bands in ascending order. A band covers
//! `lower <= bmi < upper`; the first band containing the value wins.

use bmi_common::health::{AgeGroup, BmiCategory, ChildFloor};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub category: BmiCategory,
    pub lower: f64,
    pub upper: f64,
    /// Only applied under [`ChildFloor::Underweight`].
    pub below_floor: bool,
}

impl Band {
    const fn new(category: BmiCategory, lower: f64, upper: f64) -> Self {
        Self {
            category,
            lower,
            upper,
            below_floor: false,
        }
    }

    const fn floor_gated(category: BmiCategory, upper: f64) -> Self {
        Self {
            category,
            lower: f64::NEG_INFINITY,
            upper,
            below_floor: true,
        }
    }

    pub fn contains(&self, bmi: f64) -> bool {
        self.lower <= bmi && bmi < self.upper
    }

    pub fn is_open_below(&self) -> bool {
        self.lower == f64::NEG_INFINITY
    }

    pub fn is_open_above(&self) -> bool {
        self.upper == f64::INFINITY
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ThresholdTable {
    pub age_group: AgeGroup,
    bands: &'static [Band],
}

impl ThresholdTable {
    /// Bands in effect under the given child floor, ascending.
    pub fn bands(self, child_floor: ChildFloor) -> impl Iterator<Item = &'static Band> {
        let include_floor: bool = child_floor == ChildFloor::Underweight;
        self.bands
            .iter()
            .filter(move |band| include_floor || !band.below_floor)
    }

    pub fn classify(self, bmi: f64, child_floor: ChildFloor) -> Option<BmiCategory> {
        self.bands(child_floor)
            .find(|band| band.contains(bmi))
            .map(|band| band.category)
    }

    /// Lowest BMI any band covers, or `None` when the table is open below.
    pub fn floor(self, child_floor: ChildFloor) -> Option<f64> {
        self.bands(child_floor)
            .next()
            .filter(|band| !band.is_open_below())
            .map(|band| band.lower)
    }
}

use BmiCategory::*;

const INF: f64 = f64::INFINITY;
const NEG_INF: f64 = f64::NEG_INFINITY;

static ADULT: [Band; 5] = [
    Band::new(Underweight, NEG_INF, 18.5),
    Band::new(Normal, 18.5, 23.0),
    Band::new(Overweight, 23.0, 25.0),
    Band::new(Obese, 25.0, 30.0),
    Band::new(SeverelyObese, 30.0, INF),
];

static SENIOR: [Band; 5] = [
    Band::new(Underweight, NEG_INF, 20.0),
    Band::new(Normal, 20.0, 24.0),
    Band::new(Overweight, 24.0, 27.0),
    Band::new(Obese, 27.0, 30.0),
    Band::new(SeverelyObese, 30.0, INF),
];

// No severely obese band: anything from 24 up is obese.
static CHILD: [Band; 4] = [
    Band::floor_gated(Underweight, 15.0),
    Band::new(Normal, 15.0, 21.0),
    Band::new(Overweight, 21.0, 24.0),
    Band::new(Obese, 24.0, INF),
];

pub fn table(age_group: AgeGroup) -> ThresholdTable {
    let bands: &'static [Band] = match age_group {
        AgeGroup::Child => &CHILD,
        AgeGroup::Adult => &ADULT,
        AgeGroup::Senior => &SENIOR,
    };
    ThresholdTable { age_group, bands }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
