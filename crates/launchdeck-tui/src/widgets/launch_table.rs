//! Launch results table with its pagination footer

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Row, StatefulWidget, Table, TableState, Widget},
};

use launchdeck_app::view_model::{LaunchRow, LaunchTable};

use crate::theme::styles;

use super::{truncate, Paginator};

/// Marks rows whose mission has a patch image
const IMAGE_MARKER: &str = "▣ ";

const WIDTHS: [Constraint; 4] = [
    Constraint::Fill(1),
    Constraint::Length(14),
    Constraint::Length(20),
    Constraint::Length(12),
];

pub struct LaunchTableView<'a> {
    table: &'a LaunchTable,
    selected: usize,
    focused: bool,
}

impl<'a> LaunchTableView<'a> {
    pub fn new(table: &'a LaunchTable) -> Self {
        Self {
            table,
            selected: 0,
            focused: false,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn row(launch: &LaunchRow) -> Row<'static> {
        let marker = if launch.image.is_some() {
            Span::styled(IMAGE_MARKER, styles::accent())
        } else {
            Span::raw("  ")
        };
        let mission = Line::from(vec![
            marker,
            Span::styled(launch.mission.label.clone(), styles::link()),
        ]);

        Row::new(vec![
            Cell::from(mission),
            Cell::from(Span::styled(
                truncate(&launch.rocket, 14),
                styles::text_primary(),
            )),
            Cell::from(Span::styled(
                truncate(&launch.launch_site, 20),
                styles::text_secondary(),
            )),
            Cell::from(Span::styled(
                launch.launch_date.clone(),
                styles::text_secondary(),
            )),
        ])
    }
}

impl Widget for LaunchTableView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 || inner.width == 0 {
            return;
        }

        let [rows_area, footer_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let header = Row::new(
            self.table
                .columns
                .iter()
                .enumerate()
                .map(|(i, title)| {
                    // Mission cells start after the image marker
                    let title = if i == 0 {
                        format!("  {}", title)
                    } else {
                        title.to_string()
                    };
                    Cell::from(Span::styled(title, styles::heading()))
                }),
        )
        .bottom_margin(1);

        let rows: Vec<Row> = self.table.rows.iter().map(Self::row).collect();

        let table = Table::new(rows, WIDTHS)
            .header(header)
            .column_spacing(2)
            .row_highlight_style(styles::selected_row());

        let mut state = TableState::default();
        if self.focused && !self.table.rows.is_empty() {
            state.select(Some(self.selected.min(self.table.rows.len() - 1)));
        }
        StatefulWidget::render(table, rows_area, buf, &mut state);

        Paginator::new(self.table).render(footer_area, buf);
    }
}
