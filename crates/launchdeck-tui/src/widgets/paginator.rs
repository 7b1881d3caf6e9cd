//! Pagination footer: page size, window label, previous/next

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use launchdeck_app::view_model::LaunchTable;

use crate::theme::styles;

pub struct Paginator<'a> {
    table: &'a LaunchTable,
}

impl<'a> Paginator<'a> {
    pub fn new(table: &'a LaunchTable) -> Self {
        Self { table }
    }
}

impl Widget for Paginator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let enabled = |on: bool| {
            if on {
                styles::accent()
            } else {
                styles::text_muted()
            }
        };

        let line = Line::from(vec![
            Span::styled("Rows per page: ", styles::text_secondary()),
            Span::styled(self.table.page_size.to_string(), styles::text_primary()),
            Span::styled(" (s)", styles::keybinding()),
            Span::raw("    "),
            Span::styled(self.table.footer.as_str(), styles::text_primary()),
            Span::raw("    "),
            Span::styled("‹ Prev (p)", enabled(self.table.has_previous)),
            Span::raw("  "),
            Span::styled("Next (n) ›", enabled(self.table.has_next)),
            Span::raw(" "),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use launchdeck_app::view_model::COLUMNS;
    use launchdeck_core::PageSize;

    #[test]
    fn test_renders_footer_and_size() {
        let table = LaunchTable {
            columns: COLUMNS,
            rows: Vec::new(),
            footer: "31-60 of 109".to_string(),
            page_size: PageSize::Thirty,
            has_previous: true,
            has_next: true,
        };
        let mut term = TestTerminal::new();
        term.render_widget(Paginator::new(&table), Rect::new(0, 0, 80, 1));

        assert!(term.buffer_contains("Rows per page: 30"));
        assert!(term.buffer_contains("31-60 of 109"));
        assert!(term.buffer_contains("Next (n)"));
    }
}
