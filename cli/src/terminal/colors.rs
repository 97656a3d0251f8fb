use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const MUTED: Color = Color::BrightBlack;

pub const UNDERWEIGHT: Color = Color::Blue;
pub const NORMAL: Color = Color::Green;
pub const OVERWEIGHT: Color = Color::Yellow;
pub const OBESE: Color = Color::TrueColor {
    r: 234,
    g: 88,
    b: 12,
};
pub const SEVERELY_OBESE: Color = Color::Red;
pub const UNCLASSIFIED: Color = Color::Magenta;
