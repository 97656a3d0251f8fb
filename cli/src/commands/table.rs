use bmi_common::config::Config;
use bmi_common::health::AgeGroup;
use bmi_core::engine::thresholds;
use bmi_core::i18n::Catalog;
use colored::*;

use crate::mprint;
use crate::terminal::{colors, format, print};

type Detail = (String, ColoredString);

pub fn table(age_group: Option<AgeGroup>, cfg: &Config) -> anyhow::Result<()> {
    let catalog = Catalog::new(cfg.locale);
    let groups: Vec<AgeGroup> = match age_group {
        Some(group) => vec![group],
        None => AgeGroup::ALL.to_vec(),
    };

    print::header(catalog.text("categories.title"), cfg.quiet);
    for (idx, group) in groups.iter().enumerate() {
        print::tree_head(idx, catalog.age_group(*group));
        print::as_tree_one_level(band_details(&catalog, *group, cfg));
        if idx + 1 != groups.len() {
            mprint!();
        }
    }

    Ok(())
}

fn band_details(catalog: &Catalog, age_group: AgeGroup, cfg: &Config) -> Vec<Detail> {
    let table = thresholds::table(age_group);
    let mut details: Vec<Detail> = table
        .bands(cfg.child_floor)
        .map(|band| {
            let status: String = catalog.status(Some(band.category)).to_string();
            let range: ColoredString =
                format::band_range(band).color(format::category_color(Some(band.category)));
            (status, range)
        })
        .collect();

    if let Some(floor) = table.floor(cfg.child_floor) {
        let status: String = catalog.status(None).to_string();
        let range: ColoredString = format!("BMI < {floor}").color(colors::UNCLASSIFIED);
        details.insert(0, (status, range));
    }

    details
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
