//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
const HEADER_HEIGHT: u16 = 3;
/// Filter input: bordered single line
const SEARCH_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;

/// Areas of the list screen
#[derive(Debug, Clone, Copy)]
pub struct ListAreas {
    pub header: Rect,
    pub search: Rect,
    /// Table, prompt, or message panel
    pub content: Rect,
    pub status: Rect,
}

/// Areas of the detail screen
#[derive(Debug, Clone, Copy)]
pub struct DetailAreas {
    pub header: Rect,
    pub content: Rect,
    pub status: Rect,
}

pub fn list_layout(area: Rect) -> ListAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(SEARCH_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .split(area);

    ListAreas {
        header: chunks[0],
        search: chunks[1],
        content: chunks[2],
        status: chunks[3],
    }
}

pub fn detail_layout(area: Rect) -> DetailAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .split(area);

    DetailAreas {
        header: chunks[0],
        content: chunks[1],
        status: chunks[2],
    }
}
