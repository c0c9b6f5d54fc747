use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 129, g: 199, b: 132 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 202, b: 40 };
pub const SEPARATOR: Color = Color::TrueColor { r: 110, g: 110, b: 110 };
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 220, g: 220, b: 220 };
pub const IPV4_ADDR: Color = Color::TrueColor { r: 100, g: 181, b: 246 };
pub const IPV6_ADDR: Color = Color::TrueColor { r: 186, g: 104, b: 200 };
pub const SIGNAL: Color = Color::TrueColor { r: 77, g: 208, b: 225 };
