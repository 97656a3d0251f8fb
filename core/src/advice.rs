//! Weight-management tips, four per category, as catalog keys.

use bmi_common::health::BmiCategory;

pub const TIPS_PER_CATEGORY: usize = 4;

/// Catalog keys of the tips for `category`, in display order.
pub fn tip_keys(category: BmiCategory) -> [&'static str; TIPS_PER_CATEGORY] {
    match category {
        BmiCategory::Underweight => [
            "tips.underweight.1",
            "tips.underweight.2",
            "tips.underweight.3",
            "tips.underweight.4",
        ],
        BmiCategory::Normal => [
            "tips.normal.1",
            "tips.normal.2",
            "tips.normal.3",
            "tips.normal.4",
        ],
        BmiCategory::Overweight => [
            "tips.overweight.1",
            "tips.overweight.2",
            "tips.overweight.3",
            "tips.overweight.4",
        ],
        BmiCategory::Obese => [
            "tips.obese.1",
            "tips.obese.2",
            "tips.obese.3",
            "tips.obese.4",
        ],
        BmiCategory::SeverelyObese => [
            "tips.severelyObese.1",
            "tips.severelyObese.2",
            "tips.severelyObese.3",
            "tips.severelyObese.4",
        ],
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
