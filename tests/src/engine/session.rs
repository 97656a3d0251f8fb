#![cfg(test)]
use bmi_common::health::{AgeGroup, BmiCategory, ChildFloor};
use bmi_common::locale::Locale;
use bmi_core::advice;
use bmi_core::calculator::{Calculator, Outcome};
use bmi_core::i18n::{self, Catalog};

/// Walks a calculator through the same steps a user of the form would.
#[test]
fn calculate_then_reset() {
    let mut calc = Calculator::new(ChildFloor::default());

    calc.set_height("165");
    assert_eq!(calc.calculate(), Ok(Outcome::Skipped));
    assert_eq!(calc.last_result(), None);

    calc.set_weight("82");
    calc.set_age_group(AgeGroup::Senior);
    let Ok(Outcome::Computed(result)) = calc.calculate() else {
        panic!("expected a computed result");
    };
    // 82 / 1.65^2 = 30.12
    assert_eq!(result.value, 30.12);
    assert_eq!(result.category, Some(BmiCategory::SeverelyObese));

    calc.reset();
    assert_eq!(calc.age_group(), AgeGroup::Adult);
    assert_eq!(calc.last_result(), None);
}

/// A result renders in every locale with a status, a footnote where the
/// age group has one, and four tips.
#[test]
fn results_render_in_every_locale() {
    let mut calc = Calculator::new(ChildFloor::default());
    calc.set_height("140");
    calc.set_weight("45");
    calc.set_age_group(AgeGroup::Child);
    let Ok(Outcome::Computed(result)) = calc.calculate() else {
        panic!("expected a computed result");
    };
    let category = result.category.expect("22.96 is overweight for a child");
    assert_eq!(category, BmiCategory::Overweight);

    for locale in Locale::ALL {
        let catalog = Catalog::new(locale);
        assert!(catalog.lookup(i18n::status_key(category)).is_ok());
        let note = i18n::note_key(AgeGroup::Child).expect("children have a footnote");
        assert!(catalog.lookup(note).is_ok());
        for key in advice::tip_keys(category) {
            assert!(catalog.lookup(key).is_ok(), "{key} in {locale}");
        }
    }
}
