use bmi_common::config::Config;
use bmi_common::health::{AgeGroup, BmiCategory, BmiResult};
use bmi_core::advice;
use bmi_core::i18n::{self, Catalog};
use colored::*;

use crate::mprint;
use crate::terminal::{colors, format, print};

/// Prints a result block: value, status with age-group footnote, and tips.
pub fn result(catalog: &Catalog, result: &BmiResult, age_group: AgeGroup, cfg: &Config) {
    print::header(catalog.text("results.title"), cfg.quiet);

    let bmi_key: &str = catalog.text("results.bmi");
    let status_key: &str = catalog.text("results.status");
    let group_key: &str = catalog.text("inputs.ageGroup");
    print::set_key_width([bmi_key, status_key, group_key]);

    print::aligned_line(bmi_key, format::bmi_value(result.value).bold());
    print::aligned_line(status_key, status_with_note(catalog, result.category, age_group));
    print::aligned_line(group_key, catalog.age_group(age_group));

    if !cfg.shows_advice() {
        return;
    }
    if let Some(category) = result.category {
        tips(catalog, category, cfg);
    }
}

fn status_with_note(
    catalog: &Catalog,
    category: Option<BmiCategory>,
    age_group: AgeGroup,
) -> ColoredString {
    let status: ColoredString = format::status(catalog, category);
    match i18n::note_key(age_group) {
        Some(key) => format!("{} {}", status, catalog.text(key).color(colors::MUTED)).normal(),
        None => status,
    }
}

pub fn tips(catalog: &Catalog, category: BmiCategory, cfg: &Config) {
    if cfg.shows_decorations() {
        mprint!();
    }
    print::header(catalog.text("tips.title"), cfg.quiet);
    for key in advice::tip_keys(category) {
        print::bullet(catalog.text(key));
    }
}

pub fn skipped(catalog: &Catalog) {
    print::print_status(catalog.text("results.skipped").color(colors::MUTED).to_string());
}

pub fn disclaimer(catalog: &Catalog, cfg: &Config) {
    if !cfg.shows_decorations() {
        return;
    }
    mprint!();
    print::centerln(&catalog.text("footer.disclaimer").italic().dimmed().to_string());
}
