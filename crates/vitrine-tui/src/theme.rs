use ratatui::style::Color;

/// Emerald-on-dark palette used across the showcase UI.
pub struct EmeraldNight;

impl EmeraldNight {
    // Background colors
    pub const BG0: Color = Color::Rgb(0x0a, 0x1f, 0x1a);
    pub const BG1: Color = Color::Rgb(0x10, 0x2b, 0x24);
    pub const BG2: Color = Color::Rgb(0x17, 0x3a, 0x30);

    // Foreground colors
    pub const FG0: Color = Color::Rgb(0xe8, 0xf0, 0xec);
    pub const FG1: Color = Color::Rgb(0xc2, 0xd4, 0xcc);
    pub const GREY0: Color = Color::Rgb(0x5c, 0x72, 0x6a);
    pub const GREY1: Color = Color::Rgb(0x7e, 0x94, 0x8b);

    // Palette colors
    pub const RED: Color = Color::Rgb(0xe5, 0x67, 0x5c);
    pub const ORANGE: Color = Color::Rgb(0xe3, 0x93, 0x4e);
    pub const YELLOW: Color = Color::Rgb(0xd9, 0xb4, 0x5b);
    pub const BLUE: Color = Color::Rgb(0x6f, 0xa8, 0xc9);

    // Semantic colors
    pub const ACCENT: Color = Color::Rgb(0x34, 0xd3, 0x99);
    pub const SELECTION: Color = Color::Rgb(0x17, 0x3a, 0x30);
    pub const ERROR: Color = Self::RED;
    pub const WARNING: Color = Self::ORANGE;
}
