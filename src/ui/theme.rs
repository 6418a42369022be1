use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x0a, 0x84, 0xff);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const SECTION_HEADER_BG: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const INDEX_TEXT: Color = ACCENT;
pub const INDEX_SELECTED_FG: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const INDEX_SELECTED_BG: Color = ACCENT;
pub const BUBBLE_BORDER: Color = ACCENT;
