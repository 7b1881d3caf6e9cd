//! Detail view for a single launch

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use launchdeck_app::view_model::{
    DetailContent, LaunchDetail, Link, LAUNCH_DATE_LABEL, ROCKET_NAME_LABEL,
};

use crate::theme::styles;

use super::spinner_frame;

pub struct LaunchDetailView<'a> {
    content: &'a DetailContent,
    back: &'a Link,
    tick: u64,
}

impl<'a> LaunchDetailView<'a> {
    pub fn new(content: &'a DetailContent, back: &'a Link) -> Self {
        Self {
            content,
            back,
            tick: 0,
        }
    }

    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    fn launch_lines(detail: &'a LaunchDetail) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::from(Span::styled(detail.heading.as_str(), styles::heading())),
            Line::default(),
            Line::from(vec![
                Span::styled(LAUNCH_DATE_LABEL, styles::text_secondary()),
                Span::raw(" "),
                Span::styled(detail.launch_date.as_str(), styles::text_primary()),
            ]),
            Line::from(vec![
                Span::styled(ROCKET_NAME_LABEL, styles::text_secondary()),
                Span::raw(" "),
                Span::styled(detail.rocket_name.as_str(), styles::text_primary()),
            ]),
        ];

        if let Some(image) = &detail.image {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("▣ ", styles::accent()),
                Span::styled(image.alt.as_str(), styles::text_secondary()),
                Span::raw(" "),
                Span::styled(image.src.as_str(), styles::text_muted()),
            ]));
        }

        if let Some(description) = &detail.description {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                description.as_str(),
                styles::text_primary(),
            )));
        }

        if let Some(article) = &detail.article {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled(article.label.as_str(), styles::link()),
                Span::styled(" (o)", styles::keybinding()),
            ]));
        }

        lines
    }
}

impl Widget for LaunchDetailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = vec![
            Line::from(vec![
                Span::styled("← ", styles::accent()),
                Span::styled(self.back.label.as_str(), styles::link()),
                Span::styled(" (esc)", styles::keybinding()),
            ]),
            Line::default(),
        ];

        match self.content {
            DetailContent::Loading => lines.push(Line::from(vec![
                Span::styled(spinner_frame(self.tick), styles::accent()),
                Span::styled(" Loading launch...", styles::text_secondary()),
            ])),
            DetailContent::NotFound(message) => {
                lines.push(Line::from(Span::styled(*message, styles::heading())))
            }
            DetailContent::Error(message) => {
                lines.push(Line::from(Span::styled(
                    message.as_str(),
                    styles::status_red(),
                )));
                lines.push(Line::default());
                lines.push(Line::from(vec![
                    Span::styled("r", styles::keybinding()),
                    Span::styled(" retry", styles::text_muted()),
                ]));
            }
            DetailContent::Launch(detail) => lines.extend(Self::launch_lines(detail)),
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
