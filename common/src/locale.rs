use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

/// A language the message catalog ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    Ko,
    En,
    Ja,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Ko, Locale::En, Locale::Ja];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = InputError;

    /// Accepts the bare language code, ignoring case and any region suffix
    /// (`ko`, `EN`, `ja-JP`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match lang.as_str() {
            "ko" => Ok(Locale::Ko),
            "en" => Ok(Locale::En),
            "ja" => Ok(Locale::Ja),
            _ => Err(InputError::UnknownLocale(s.to_string())),
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_korean() {
        assert_eq!(Locale::default(), Locale::Ko);
    }

    #[test]
    fn test_from_str_codes() {
        assert_eq!("ko".parse::<Locale>(), Ok(Locale::Ko));
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("ja-JP".parse::<Locale>(), Ok(Locale::Ja));
        assert_eq!("en_US".parse::<Locale>(), Ok(Locale::En));
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!(
            "fr".parse::<Locale>(),
            Err(InputError::UnknownLocale("fr".to_string()))
        );
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn test_display_round_trips_code() {
        for locale in Locale::ALL {
            assert_eq!(locale.to_string().parse::<Locale>(), Ok(locale));
        }
    }
}
