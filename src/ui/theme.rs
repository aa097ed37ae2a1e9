use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const PRICE_TEXT: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const ERROR_TEXT: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);

const CATEGORY_PALETTE: [Color; 5] = [
    Color::Rgb(0x83, 0xfa, 0x9d),
    Color::Rgb(0xfa, 0xd6, 0x83),
    Color::Rgb(0xb7, 0x83, 0xfa),
    Color::Rgb(0x83, 0xd0, 0xfa),
    Color::Rgb(0xfa, 0x83, 0xc3),
];

/// Stable tag color per category string.
pub fn category_color(category: &str) -> Color {
    let hash: usize = category.bytes().map(usize::from).sum();
    CATEGORY_PALETTE[hash % CATEGORY_PALETTE.len()]
}
