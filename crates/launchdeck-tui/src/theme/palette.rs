//! Color palette for a dark terminal background.

use ratatui::style::Color;

pub const CARD_BG: Color = Color::Reset;

pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

/// Brand color: title, spinner, enabled paginator arrows
pub const ACCENT: Color = Color::Cyan;
pub const LINK: Color = Color::LightBlue;

pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

pub const ERROR: Color = Color::Red;
pub const NOTICE: Color = Color::Yellow;

pub const ROW_HIGHLIGHT_BG: Color = Color::DarkGray;
