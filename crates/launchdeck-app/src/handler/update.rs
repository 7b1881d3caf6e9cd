//! Main update function - handles state transitions (TEA pattern)

use launchdeck_core::prelude::*;
use launchdeck_core::Route;

use crate::launches::LaunchesRequest;
use crate::message::Message;
use crate::state::{AppPhase, AppState, Focus};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick = state.tick.wrapping_add(1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Filter input
        // ─────────────────────────────────────────────────────────
        Message::FilterInput(c) => {
            state.launches.search_input_mut().insert_char(c);
            UpdateResult::none()
        }

        Message::FilterBackspace => {
            state.launches.search_input_mut().backspace();
            UpdateResult::none()
        }

        Message::FilterClear => {
            state.launches.search_input_mut().clear();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // List triggers
        // ─────────────────────────────────────────────────────────
        Message::Search => {
            let request = state.launches.search();
            if request.is_some() {
                state.focus = Focus::Table;
            }
            fetch_launches(state, request)
        }

        Message::NextPage => {
            let request = state.launches.next();
            fetch_launches(state, request)
        }

        Message::PreviousPage => {
            let request = state.launches.previous();
            fetch_launches(state, request)
        }

        Message::SetPageSize(size) => {
            let request = state.launches.set_limit(size);
            fetch_launches(state, request)
        }

        Message::CyclePageSize => {
            let request = state.launches.cycle_limit();
            fetch_launches(state, request)
        }

        // ─────────────────────────────────────────────────────────
        // Focus and selection
        // ─────────────────────────────────────────────────────────
        Message::FocusFilter => {
            state.focus = Focus::Filter;
            UpdateResult::none()
        }

        Message::ToggleFocus => {
            state.focus = state.focus.toggle();
            UpdateResult::none()
        }

        Message::SelectPrevious => {
            state.selected_row = state.selected_row.saturating_sub(1);
            UpdateResult::none()
        }

        Message::SelectNext => {
            if state.selected_row + 1 < state.row_count() {
                state.selected_row += 1;
            }
            UpdateResult::none()
        }

        Message::OpenSelected => match state
            .launches
            .page()
            .and_then(|page| page.items.get(state.selected_row))
        {
            Some(launch) => UpdateResult::message(Message::Navigate(Route::Launch(
                launch.id.clone(),
            ))),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(route) => navigate(state, route),

        Message::Back => navigate(state, Route::Launches),

        // ─────────────────────────────────────────────────────────
        // Detail view
        // ─────────────────────────────────────────────────────────
        Message::OpenArticle => {
            if !state.on_detail() {
                return UpdateResult::none();
            }
            match state
                .detail
                .record()
                .and_then(|record| record.article_link.clone())
            {
                Some(url) => UpdateResult::action(UpdateAction::OpenUrl { url }),
                None => UpdateResult::none(),
            }
        }

        Message::RetryDetail => {
            if !state.on_detail() {
                return UpdateResult::none();
            }
            match state.detail.retry() {
                Some((request_id, id)) => {
                    UpdateResult::action(UpdateAction::FetchLaunch { request_id, id })
                }
                None => UpdateResult::none(),
            }
        }

        // ─────────────────────────────────────────────────────────
        // Fetch completions
        // ─────────────────────────────────────────────────────────
        Message::LaunchesFetched { request_id, result } => {
            if state.launches.apply(request_id, result) {
                state.selected_row = 0;
                state.clamp_selection();
            }
            UpdateResult::none()
        }

        Message::LaunchFetched {
            request_id,
            id,
            result,
        } => {
            state.detail.apply(request_id, &id, result);
            UpdateResult::none()
        }

        Message::BrowserOpenFailed { url, error } => {
            warn!("Failed to open {} in browser: {}", url, error);
            state.status = Some(format!("Could not open browser: {}", error));
            UpdateResult::none()
        }
    }
}

fn fetch_launches(state: &mut AppState, request: Option<LaunchesRequest>) -> UpdateResult {
    match request {
        Some(LaunchesRequest { request_id, query }) => {
            state.status = None;
            UpdateResult::action(UpdateAction::FetchLaunches { request_id, query })
        }
        None => UpdateResult::none(),
    }
}

fn navigate(state: &mut AppState, route: Route) -> UpdateResult {
    if state.route == route {
        return UpdateResult::none();
    }
    debug!("Navigate {} -> {}", state.route, route);
    state.status = None;
    state.route = route.clone();

    match route {
        Route::Launches => {
            state.detail.clear();
            UpdateResult::none()
        }
        Route::Launch(id) => {
            let request_id = state.detail.resolve(id.clone());
            UpdateResult::action(UpdateAction::FetchLaunch { request_id, id })
        }
    }
}
