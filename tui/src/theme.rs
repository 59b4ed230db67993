//! Theme configuration for the note board.
//!
//! Defines color schemes for the header bar, note cards, the add-note form
//! and alert dialogs. The active one is picked by name from settings.

use ratatui::style::Color as TermColor;


/// A named color, convertible to a ratatui color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
    Magenta,
    White,
    Gray,
    DarkGray,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    Rgb(u8, u8, u8),
}


impl Color {
    pub fn to_term(self) -> TermColor {
        match self {
            Color::Default => TermColor::Reset,
            Color::Black => TermColor::Black,
            Color::Red => TermColor::Red,
            Color::Green => TermColor::Green,
            Color::Yellow => TermColor::Yellow,
            Color::Blue => TermColor::Blue,
            Color::Cyan => TermColor::Cyan,
            Color::Magenta => TermColor::Magenta,
            Color::White => TermColor::White,
            Color::Gray => TermColor::Gray,
            Color::DarkGray => TermColor::DarkGray,
            Color::BrightRed => TermColor::LightRed,
            Color::BrightGreen => TermColor::LightGreen,
            Color::BrightYellow => TermColor::LightYellow,
            Color::BrightBlue => TermColor::LightBlue,
            Color::Rgb(r, g, b) => TermColor::Rgb(r, g, b),
        }
    }
}


/// A complete color theme for the note board.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub header_bg: Color,
    pub header_fg: Color,
    pub card_border: Color,
    pub card_selected: Color,
    pub card_title: Color,
    pub card_text: Color,
    pub placeholder: Color,
    pub focus: Color,
    pub info: Color,
    pub success: Color,
    pub error: Color,
}


impl Theme {
    /// Dark terminal theme, the default.
    pub fn default_dark() -> Self {
        Theme {
            name: "dark".to_string(),
            header_bg: Color::Rgb(0x25, 0x28, 0x2a),
            header_fg: Color::White,
            card_border: Color::DarkGray,
            card_selected: Color::BrightBlue,
            card_title: Color::Gray,
            card_text: Color::DarkGray,
            placeholder: Color::DarkGray,
            focus: Color::BrightBlue,
            info: Color::Cyan,
            success: Color::BrightGreen,
            error: Color::BrightRed,
        }
    }

    /// Light terminal theme.
    pub fn default_light() -> Self {
        Theme {
            name: "light".to_string(),
            header_bg: Color::Blue,
            header_fg: Color::White,
            card_border: Color::Gray,
            card_selected: Color::Blue,
            card_title: Color::Black,
            card_text: Color::DarkGray,
            placeholder: Color::Gray,
            focus: Color::Blue,
            info: Color::Blue,
            success: Color::Green,
            error: Color::Red,
        }
    }

    /// Minimal theme: no bright colors, only basic ANSI.
    pub fn minimal() -> Self {
        Theme {
            name: "minimal".to_string(),
            header_bg: Color::Default,
            header_fg: Color::Default,
            card_border: Color::Default,
            card_selected: Color::White,
            card_title: Color::Default,
            card_text: Color::Default,
            placeholder: Color::Default,
            focus: Color::White,
            info: Color::Default,
            success: Color::Green,
            error: Color::Red,
        }
    }

    /// Look up a built-in theme by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Theme::default_dark()),
            "light" => Some(Theme::default_light()),
            "minimal" => Some(Theme::minimal()),
            _ => None,
        }
    }
}


impl Default for Theme {
    fn default() -> Self {
        Theme::default_dark()
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
