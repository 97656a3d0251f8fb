use bmi_common::config::Config;
use bmi_common::health::{AgeGroup, BmiResult};
use bmi_core::engine;
use bmi_core::i18n::Catalog;
use tracing::warn;

use crate::terminal::report;

pub fn classify(bmi: f64, age_group: AgeGroup, cfg: &Config) -> anyhow::Result<()> {
    if !bmi.is_finite() {
        anyhow::bail!("BMI must be a finite number, got {bmi}");
    }

    let catalog = Catalog::new(cfg.locale);
    let result = BmiResult {
        value: engine::round_to_hundredths(bmi),
        category: engine::classify(bmi, age_group, cfg.child_floor),
    };

    if !result.is_classified() {
        warn!("{bmi} falls outside every {age_group} band");
    }

    report::result(&catalog, &result, age_group, cfg);
    Ok(())
}
