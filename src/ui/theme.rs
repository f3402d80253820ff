use ratatui::style::Color;

/// Base color palette
pub struct Palette;

impl Palette {
    pub const DUCKBONES: Color = Color::Rgb(0x15, 0x19, 0x26);
    pub const SURFACE: Color = Color::Rgb(0x2a, 0x2a, 0x2e);
    pub const OVERLAY: Color = Color::Rgb(0x45, 0x47, 0x5a);
}

/// Application color theme constants
pub struct Theme;

impl Theme {
    // Title bar
    pub const TITLE_BG: Color = Palette::DUCKBONES;

    // Table header, plain and for the selected column
    pub const TABLE_HEADER_BG: Color = Palette::SURFACE;
    pub const SELECTED_HEADER_BG: Color = Palette::OVERLAY;

    // Text
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const TEXT_ACCENT: Color = Color::Cyan;

    // Status
    pub const STATUS_ERROR: Color = Color::Red;
    pub const STATUS_ALIGNED: Color = Color::Green;
    pub const STATUS_UNALIGNED: Color = Color::Yellow;
}
