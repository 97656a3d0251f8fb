//! # Message Catalog
//!
//! Localized strings for the front end, keyed the same way in every locale.
//!
//! A lookup either finds the key or reports [`I18nError::KeyNotFound`];
//! callers that want a literal fallback use [`Catalog::text_or`], which logs
//! the miss instead of hiding it.

mod messages;

use bmi_common::health::{AgeGroup, BmiCategory};
use bmi_common::locale::Locale;
use thiserror::Error;
use tracing::warn;

use messages::Messages;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    #[error("translation key not found: {key} ({locale})")]
    KeyNotFound { key: String, locale: Locale },
}

/// Read-only view over the messages of one locale.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    locale: Locale,
    messages: Messages,
}

impl Catalog {
    pub fn new(locale: Locale) -> Self {
        let messages: Messages = match locale {
            Locale::Ko => messages::KO,
            Locale::En => messages::EN,
            Locale::Ja => messages::JA,
        };
        Self { locale, messages }
    }

    pub fn lookup(&self, key: &str) -> Result<&'static str, I18nError> {
        self.messages
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, text)| *text)
            .ok_or_else(|| I18nError::KeyNotFound {
                key: key.to_string(),
                locale: self.locale,
            })
    }

    /// Looks up `key`, falling back to `default` and logging the miss.
    pub fn text_or<'a>(&self, key: &str, default: &'a str) -> &'a str {
        match self.lookup(key) {
            Ok(text) => text,
            Err(e) => {
                warn!("{e}");
                default
            }
        }
    }

    /// Looks up `key`, falling back to the key itself.
    pub fn text<'a>(&self, key: &'a str) -> &'a str {
        self.text_or(key, key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + use<> {
        let messages: Messages = self.messages;
        messages.iter().map(|(key, _)| *key)
    }

    pub fn status(&self, category: Option<BmiCategory>) -> &'static str {
        match category {
            Some(category) => self.text(status_key(category)),
            None => self.text("results.unclassified"),
        }
    }

    pub fn age_group(&self, age_group: AgeGroup) -> &'static str {
        self.text(age_group_key(age_group))
    }
}

pub fn status_key(category: BmiCategory) -> &'static str {
    match category {
        BmiCategory::Underweight => "bmiStatus.underweight",
        BmiCategory::Normal => "bmiStatus.normal",
        BmiCategory::Overweight => "bmiStatus.overweight",
        BmiCategory::Obese => "bmiStatus.obese",
        BmiCategory::SeverelyObese => "bmiStatus.severelyObese",
    }
}

pub fn age_group_key(age_group: AgeGroup) -> &'static str {
    match age_group {
        AgeGroup::Child => "inputs.child",
        AgeGroup::Adult => "inputs.adult",
        AgeGroup::Senior => "inputs.senior",
    }
}

/// Footnote shown next to a status; adults get none.
pub fn note_key(age_group: AgeGroup) -> Option<&'static str> {
    match age_group {
        AgeGroup::Child => Some("results.childNote"),
        AgeGroup::Adult => None,
        AgeGroup::Senior => Some("results.seniorNote"),
    }
}

pub fn language_key(locale: Locale) -> &'static str {
    match locale {
        Locale::Ko => "language.ko",
        Locale::En => "language.en",
        Locale::Ja => "language.ja",
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
