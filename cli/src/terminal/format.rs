use bmi_common::health::BmiCategory;
use bmi_core::engine::thresholds::Band;
use bmi_core::i18n::Catalog;
use colored::*;

use crate::terminal::colors;

pub fn bmi_value(value: f64) -> String {
    format!("{value:.2}")
}

pub fn category_color(category: Option<BmiCategory>) -> Color {
    match category {
        Some(BmiCategory::Underweight) => colors::UNDERWEIGHT,
        Some(BmiCategory::Normal) => colors::NORMAL,
        Some(BmiCategory::Overweight) => colors::OVERWEIGHT,
        Some(BmiCategory::Obese) => colors::OBESE,
        Some(BmiCategory::SeverelyObese) => colors::SEVERELY_OBESE,
        None => colors::UNCLASSIFIED,
    }
}

pub fn status(catalog: &Catalog, category: Option<BmiCategory>) -> ColoredString {
    catalog
        .status(category)
        .color(category_color(category))
        .bold()
}

/// Half-open interval of a band, e.g. `18.5 ≤ BMI < 23`.
pub fn band_range(band: &Band) -> String {
    match (band.is_open_below(), band.is_open_above()) {
        (true, true) => "any BMI".to_string(),
        (true, false) => format!("BMI < {}", band.upper),
        (false, true) => format!("BMI ≥ {}", band.lower),
        (false, false) => format!("{} ≤ BMI < {}", band.lower, band.upper),
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
