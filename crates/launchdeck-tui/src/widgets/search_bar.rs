//! Mission-name filter input with its search button

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::styles;

const LABEL: &str = " Filter by mission name ";
const BUTTON: &str = "[ Search ]";
const BUTTON_BUSY: &str = "[ Searching ]";

pub struct SearchBar<'a> {
    text: &'a str,
    focused: bool,
    /// Search is disabled while a fetch is in flight
    loading: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            focused: false,
            loading: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(LABEL);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (button, button_style) = if self.loading {
            (BUTTON_BUSY, styles::text_muted())
        } else {
            (BUTTON, styles::accent_bold())
        };
        let [text_area, button_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(button.width() as u16 + 1),
        ])
        .areas(inner);

        // Keep the tail visible while typing past the edge
        let shown = tail(self.text, (text_area.width as usize).saturating_sub(1));
        let mut spans = vec![Span::styled(shown, styles::text_primary())];
        if self.focused {
            spans.push(Span::styled("▏", styles::accent()));
        } else if self.text.is_empty() {
            spans.push(Span::styled("type to filter, / to focus", styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(text_area, buf);

        Paragraph::new(Line::from(Span::styled(button, button_style)))
            .alignment(Alignment::Right)
            .render(button_area, buf);
    }
}

/// Last `max_width` columns of `text`
fn tail(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut width = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        start = idx;
    }
    text[start..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_renders_text_and_button() {
        let mut term = TestTerminal::new();
        term.render_widget(
            SearchBar::new("starlink").focused(true),
            Rect::new(0, 0, 60, 3),
        );

        assert!(term.buffer_contains("Filter by mission name"));
        assert!(term.buffer_contains("starlink"));
        assert!(term.buffer_contains("[ Search ]"));
    }

    #[test]
    fn test_button_disabled_while_loading() {
        let mut term = TestTerminal::new();
        term.render_widget(SearchBar::new("crs").loading(true), Rect::new(0, 0, 60, 3));

        assert!(term.buffer_contains("[ Searching ]"));
        assert!(!term.buffer_contains("[ Search ]"));
    }

    #[test]
    fn test_tail_keeps_end_of_long_input() {
        assert_eq!(tail("abcdef", 3), "def");
        assert_eq!(tail("abc", 10), "abc");
    }
}
