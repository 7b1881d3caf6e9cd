//! Header bar widget
//!
//! App title, current view name and its route path.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use unicode_width::UnicodeWidthStr;

use launchdeck_app::view_model::BACK_LINK_LABEL;
use launchdeck_core::Route;

use crate::theme::styles;

pub struct MainHeader<'a> {
    route: &'a Route,
}

impl<'a> MainHeader<'a> {
    pub fn new(route: &'a Route) -> Self {
        Self { route }
    }

    fn view_name(&self) -> &'static str {
        match self.route {
            Route::Launches => BACK_LINK_LABEL,
            Route::Launch(_) => "Launch",
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let path = self.route.path();
        let [title_area, path_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(path.width() as u16)])
                .areas(inner);

        let title = Line::from(vec![
            Span::styled("▲ launchdeck", styles::accent_bold()),
            Span::styled("  │  ", styles::text_muted()),
            Span::styled(self.view_name(), styles::heading()),
        ]);
        Paragraph::new(title).render(title_area, buf);

        Paragraph::new(Line::from(Span::styled(path, styles::text_muted())))
            .alignment(Alignment::Right)
            .render(path_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_list_header() {
        let mut term = TestTerminal::new();
        let route = Route::Launches;
        term.render_widget(MainHeader::new(&route), Rect::new(0, 0, 80, 3));

        assert!(term.buffer_contains("launchdeck"));
        assert!(term.buffer_contains("SpaceX Launches"));
    }

    #[test]
    fn test_detail_header_shows_path() {
        let mut term = TestTerminal::new();
        let route = Route::launch("109");
        term.render_widget(MainHeader::new(&route), Rect::new(0, 0, 80, 3));

        assert!(term.buffer_contains("/launch/109"));
    }
}
