//! Main render/view function (View in TEA pattern)

use ratatui::Frame;

use launchdeck_app::state::{AppState, Focus};
use launchdeck_app::view_model::{back_link, detail_content, list_content, ListContent};
use launchdeck_core::Route;

use super::{layout, widgets};

const LIST_HINTS: [(&str, &str); 6] = [
    ("enter", "open"),
    ("n/p", "page"),
    ("s", "rows"),
    ("/", "filter"),
    ("tab", "focus"),
    ("q", "quit"),
];

const FILTER_HINTS: [(&str, &str); 4] = [
    ("enter", "search"),
    ("esc", "clear"),
    ("tab", "results"),
    ("ctrl+c", "quit"),
];

const DETAIL_HINTS: [(&str, &str); 4] =
    [("esc", "back"), ("o", "see more"), ("r", "retry"), ("q", "quit")];

/// Render the complete UI (View in TEA)
///
/// Pure: reads state, never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    match &state.route {
        Route::Launches => render_list(frame, state),
        Route::Launch(_) => render_detail(frame, state),
    }
}

fn render_list(frame: &mut Frame, state: &AppState) {
    let areas = layout::list_layout(frame.area());

    frame.render_widget(widgets::MainHeader::new(&state.route), areas.header);

    let search = widgets::SearchBar::new(state.launches.search_input().filter_text())
        .focused(state.focus == Focus::Filter)
        .loading(state.launches.is_loading());
    frame.render_widget(search, areas.search);

    match list_content(&state.launches) {
        ListContent::Prompt(text) => {
            frame.render_widget(widgets::MessagePanel::prompt(text), areas.content)
        }
        ListContent::Loading => {
            frame.render_widget(widgets::MessagePanel::loading(state.tick), areas.content)
        }
        ListContent::NoResults(text) => {
            frame.render_widget(widgets::MessagePanel::heading(text), areas.content)
        }
        ListContent::Error(message) => {
            frame.render_widget(widgets::MessagePanel::error(&message), areas.content)
        }
        ListContent::Table(table) => {
            let view = widgets::LaunchTableView::new(&table)
                .selected(state.selected_row)
                .focused(state.focus == Focus::Table);
            frame.render_widget(view, areas.content);
        }
    }

    let hints: &[(&str, &str)] = match state.focus {
        Focus::Filter => &FILTER_HINTS,
        Focus::Table => &LIST_HINTS,
    };
    frame.render_widget(
        widgets::StatusBar::new(hints).notice(state.status.as_deref()),
        areas.status,
    );
}

fn render_detail(frame: &mut Frame, state: &AppState) {
    let areas = layout::detail_layout(frame.area());

    frame.render_widget(widgets::MainHeader::new(&state.route), areas.header);

    let content = detail_content(&state.detail);
    let back = back_link();
    frame.render_widget(
        widgets::LaunchDetailView::new(&content, &back).tick(state.tick),
        areas.content,
    );

    frame.render_widget(
        widgets::StatusBar::new(&DETAIL_HINTS).notice(state.status.as_deref()),
        areas.status,
    );
}
