use bmi_common::config::Config;
use bmi_common::health::AgeGroup;
use bmi_core::calculator::{Calculator, Outcome};
use bmi_core::i18n::Catalog;

use crate::terminal::report;

pub fn calc(
    height: Option<String>,
    weight: Option<String>,
    age_group: AgeGroup,
    cfg: &Config,
) -> anyhow::Result<()> {
    let catalog = Catalog::new(cfg.locale);

    let mut calculator = Calculator::new(cfg.child_floor);
    calculator.set_height(height.unwrap_or_default());
    calculator.set_weight(weight.unwrap_or_default());
    calculator.set_age_group(age_group);

    match calculator.calculate()? {
        Outcome::Skipped => report::skipped(&catalog),
        Outcome::Computed(result) => {
            report::result(&catalog, &result, age_group, cfg);
            report::disclaimer(&catalog, cfg);
        }
    }

    Ok(())
}
