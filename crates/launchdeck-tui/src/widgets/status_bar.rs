//! Bottom status line: a transient notice, or key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct StatusBar<'a> {
    hints: &'a [(&'a str, &'a str)],
    notice: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    /// `hints` are `(key, action)` pairs
    pub fn new(hints: &'a [(&'a str, &'a str)]) -> Self {
        Self {
            hints,
            notice: None,
        }
    }

    pub fn notice(mut self, notice: Option<&'a str>) -> Self {
        self.notice = notice;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        if let Some(notice) = self.notice {
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", notice),
                styles::status_yellow(),
            )))
            .render(area, buf);
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", styles::text_muted()));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*action, styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_hints() {
        let mut term = TestTerminal::new();
        term.render_widget(
            StatusBar::new(&[("q", "quit"), ("n", "next")]),
            Rect::new(0, 0, 80, 1),
        );
        assert!(term.buffer_contains("q quit · n next"));
    }

    #[test]
    fn test_notice_replaces_hints() {
        let mut term = TestTerminal::new();
        term.render_widget(
            StatusBar::new(&[("q", "quit")]).notice(Some("Could not open browser")),
            Rect::new(0, 0, 80, 1),
        );
        assert!(term.buffer_contains("Could not open browser"));
        assert!(!term.buffer_contains("quit"));
    }
}
