use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 102, g: 204, b: 153 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 196, b: 87 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 215, g: 215, b: 215 };

pub const INVENTORY: Color = Color::TrueColor { r: 120, g: 170, b: 230 };
pub const KINDNESS: Color = Color::TrueColor { r: 240, g: 150, b: 200 };
pub const FOOD: Color = Color::TrueColor { r: 230, g: 190, b: 100 };
