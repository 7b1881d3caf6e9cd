//! Semantic styles used by the widgets.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

fn fg(color: Color) -> Style {
    Style::default().fg(color)
}

pub fn text_primary() -> Style {
    fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    fg(palette::TEXT_MUTED)
}

/// Headings, table column titles, the launch detail title
pub fn heading() -> Style {
    text_primary().add_modifier(Modifier::BOLD)
}

pub fn accent() -> Style {
    fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

/// Mission names, the back link and "see more..."
pub fn link() -> Style {
    fg(palette::LINK).add_modifier(Modifier::UNDERLINED)
}

pub fn status_red() -> Style {
    fg(palette::ERROR)
}

pub fn status_yellow() -> Style {
    fg(palette::NOTICE)
}

/// Key names in hints, e.g. the `n` of `n next`
pub fn keybinding() -> Style {
    fg(palette::NOTICE)
}

pub fn selected_row() -> Style {
    Style::default()
        .bg(palette::ROW_HIGHLIGHT_BG)
        .add_modifier(Modifier::BOLD)
}

/// Rounded panel; the border lights up when the panel has focus.
pub fn glass_block(focused: bool) -> Block<'static> {
    let border = if focused {
        palette::BORDER_ACTIVE
    } else {
        palette::BORDER_DIM
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(fg(border))
        .style(Style::default().bg(palette::CARD_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_is_underlined() {
        assert!(link().add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_heading_is_bold() {
        assert!(heading().add_modifier.contains(Modifier::BOLD));
        assert_eq!(heading().fg, Some(palette::TEXT_PRIMARY));
    }
}
