use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const NEGATIVE: Color = Color::BrightRed;
