//! Centered message in place of the launch table
//!
//! Used for the idle prompt, the loading indicator, the no-results heading and
//! error messages.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

use super::spinner_frame;

pub struct MessagePanel<'a> {
    text: &'a str,
    style: Style,
    spinner: Option<u64>,
}

impl<'a> MessagePanel<'a> {
    pub fn prompt(text: &'a str) -> Self {
        Self {
            text,
            style: styles::text_secondary(),
            spinner: None,
        }
    }

    pub fn heading(text: &'a str) -> Self {
        Self {
            text,
            style: styles::heading(),
            spinner: None,
        }
    }

    pub fn error(text: &'a str) -> Self {
        Self {
            text,
            style: styles::status_red(),
            spinner: None,
        }
    }

    pub fn loading(tick: u64) -> Self {
        Self {
            text: "Loading launches...",
            style: styles::text_secondary(),
            spinner: Some(tick),
        }
    }
}

impl Widget for MessagePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = Vec::new();
        if let Some(tick) = self.spinner {
            spans.push(Span::styled(spinner_frame(tick), styles::accent()));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(self.text, self.style));

        // Roughly a third of the way down
        let top = inner.height / 3;
        let text_area = Rect {
            y: inner.y + top,
            height: inner.height - top,
            ..inner
        };
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);
    }
}
