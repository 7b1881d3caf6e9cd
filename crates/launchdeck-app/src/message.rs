//! Message types for the application (TEA pattern)

use launchdeck_core::{LaunchId, LaunchPage, LaunchRecord, PageSize, Route, TransportError};

use crate::input_key::InputKey;
use crate::request::RequestId;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (loading spinner)
    Tick,

    /// Request to quit
    Quit,

    // ─────────────────────────────────────────────────────────
    // Filter input
    // ─────────────────────────────────────────────────────────
    FilterInput(char),
    FilterBackspace,
    FilterClear,

    // ─────────────────────────────────────────────────────────
    // List triggers
    // ─────────────────────────────────────────────────────────
    /// Search the filter text from the first page
    Search,
    NextPage,
    PreviousPage,
    SetPageSize(PageSize),
    /// 30 → 50 → 100 → 30
    CyclePageSize,

    // ─────────────────────────────────────────────────────────
    // List focus and selection
    // ─────────────────────────────────────────────────────────
    FocusFilter,
    ToggleFocus,
    SelectPrevious,
    SelectNext,
    /// Open the detail of the selected row
    OpenSelected,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    Navigate(Route),
    /// Back to the list from the detail view
    Back,

    // ─────────────────────────────────────────────────────────
    // Detail view
    // ─────────────────────────────────────────────────────────
    /// Open the "see more..." article in the system browser
    OpenArticle,
    RetryDetail,

    // ─────────────────────────────────────────────────────────
    // Fetch completions
    // ─────────────────────────────────────────────────────────
    LaunchesFetched {
        request_id: RequestId,
        result: Result<LaunchPage, TransportError>,
    },
    LaunchFetched {
        request_id: RequestId,
        id: LaunchId,
        result: Result<Option<LaunchRecord>, TransportError>,
    },

    /// The system browser could not be started
    BrowserOpenFailed { url: String, error: String },
}
