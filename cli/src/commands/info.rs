use bmi_common::config::Config;
use bmi_common::health::AgeGroup;
use bmi_common::locale::Locale;
use bmi_core::i18n::{self, Catalog};
use colored::*;

use crate::mprint;
use crate::terminal::{colors, print};

pub fn info(cfg: &Config) -> anyhow::Result<()> {
    let catalog = Catalog::new(cfg.locale);

    print::set_key_width(["Version", "Locales", "Age groups"]);
    print::aligned_line("Version", env!("CARGO_PKG_VERSION").color(colors::ACCENT));

    let locales: String = Locale::ALL
        .iter()
        .map(|locale| format!("{} ({})", catalog.text(i18n::language_key(*locale)), locale))
        .collect::<Vec<String>>()
        .join(", ");
    print::aligned_line("Locales", locales);

    let groups: String = AgeGroup::ALL
        .iter()
        .map(|group| format!("{} ({})", catalog.age_group(*group), group))
        .collect::<Vec<String>>()
        .join(", ");
    print::aligned_line("Age groups", groups);

    mprint!();
    print::header(catalog.text("infoSection.title"), cfg.quiet);
    print::print_status(catalog.text("infoSection.description"));
    print::print_status(catalog.text("infoSection.formula").color(colors::ACCENT).to_string());

    Ok(())
}
