//! Key event handlers for each screen

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on the current screen and focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere, including while typing
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.on_detail() {
        return handle_key_detail(key);
    }

    match state.focus {
        Focus::Filter => handle_key_filter(key),
        Focus::Table => handle_key_table(key),
    }
}

/// Typing into the mission-name filter
fn handle_key_filter(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::Search),
        InputKey::Tab | InputKey::BackTab | InputKey::Down => Some(Message::ToggleFocus),
        InputKey::Backspace => Some(Message::FilterBackspace),
        InputKey::CharCtrl('u') => Some(Message::FilterClear),
        InputKey::Esc => Some(Message::FilterClear),
        InputKey::Char(c) => Some(Message::FilterInput(c)),
        _ => None,
    }
}

/// Row selection and paging
fn handle_key_table(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),

        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Enter => Some(Message::OpenSelected),

        InputKey::Char('n') | InputKey::Right => Some(Message::NextPage),
        InputKey::Char('p') | InputKey::Left => Some(Message::PreviousPage),
        InputKey::Char('s') => Some(Message::CyclePageSize),

        InputKey::Char('/') => Some(Message::FocusFilter),
        InputKey::Tab | InputKey::BackTab => Some(Message::ToggleFocus),
        _ => None,
    }
}

fn handle_key_detail(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Esc | InputKey::Char('b') | InputKey::Backspace => Some(Message::Back),
        InputKey::Char('o') => Some(Message::OpenArticle),
        InputKey::Char('r') => Some(Message::RetryDetail),
        _ => None,
    }
}
