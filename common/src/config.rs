use crate::health::ChildFloor;
use crate::locale::Locale;

/// Runtime options shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// `1` hides the banner and headers, `2` also hides advice and log chatter.
    pub quiet: u8,
    pub no_banner: bool,
    /// Language used for labels, statuses and advice.
    pub locale: Locale,
    /// Treatment of a child BMI below the lowest charted band.
    pub child_floor: ChildFloor,
}

impl Config {
    pub fn shows_decorations(&self) -> bool {
        self.quiet == 0
    }

    pub fn shows_advice(&self) -> bool {
        self.quiet < 2
    }
}
