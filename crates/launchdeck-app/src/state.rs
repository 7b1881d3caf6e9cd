//! Application state (Model in TEA pattern)

use launchdeck_core::Route;

use crate::config::Settings;
use crate::detail::DetailResolver;
use crate::launches::LaunchListController;

/// Lifecycle of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which part of the list screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Filter,
    Table,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Filter => Focus::Table,
            Focus::Table => Focus::Filter,
        }
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Current view; the list stays mounted beneath the detail view
    pub route: Route,

    pub focus: Focus,

    pub launches: LaunchListController,

    /// Highlighted row of the current page
    pub selected_row: usize,

    pub detail: DetailResolver,

    /// Transient notice shown in the status line
    pub status: Option<String>,

    /// Animation frame counter for loading indicators
    pub tick: u64,

    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            route: Route::Launches,
            focus: Focus::Filter,
            launches: LaunchListController::new(settings.ui.page_size),
            selected_row: 0,
            detail: DetailResolver::new(),
            status: None,
            tick: 0,
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn on_detail(&self) -> bool {
        matches!(self.route, Route::Launch(_))
    }

    /// True while any fetch of the current screen is in flight
    pub fn is_busy(&self) -> bool {
        if self.on_detail() {
            self.detail.is_loading()
        } else {
            self.launches.is_loading()
        }
    }

    /// Number of rows on the current page
    pub fn row_count(&self) -> usize {
        self.launches.page().map_or(0, |page| page.len())
    }

    pub fn clamp_selection(&mut self) {
        let rows = self.row_count();
        if rows == 0 {
            self.selected_row = 0;
        } else if self.selected_row >= rows {
            self.selected_row = rows - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchdeck_core::PageSize;

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.route, Route::Launches);
        assert_eq!(state.focus, Focus::Filter);
        assert!(!state.should_quit());
        assert!(!state.is_busy());
        assert_eq!(state.row_count(), 0);
    }

    #[test]
    fn test_page_size_from_settings() {
        let mut settings = Settings::default();
        settings.ui.page_size = PageSize::Hundred;
        let state = AppState::with_settings(settings);
        assert_eq!(state.launches.pagination().limit(), PageSize::Hundred);
    }

    #[test]
    fn test_focus_toggle() {
        assert_eq!(Focus::Filter.toggle(), Focus::Table);
        assert_eq!(Focus::Table.toggle(), Focus::Filter);
    }

    #[test]
    fn test_clamp_selection_without_rows() {
        let mut state = AppState::new();
        state.selected_row = 12;
        state.clamp_selection();
        assert_eq!(state.selected_row, 0);
    }
}
