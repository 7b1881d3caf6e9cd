//! Custom widget components

mod header;
mod launch_detail;
mod launch_table;
mod message_panel;
mod paginator;
mod search_bar;
mod status_bar;

pub use header::MainHeader;
pub use launch_detail::LaunchDetailView;
pub use launch_table::LaunchTableView;
pub use message_panel::MessagePanel;
pub use paginator::Paginator;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for an animation tick
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

/// Shorten `text` to at most `max_width` terminal columns, ending in `…` when cut.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("CRS-14", 10), "CRS-14");
        assert_eq!(truncate("CRS-14", 6), "CRS-14");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("Sentinel-6 Michael Freilich", 10), "Sentinel-…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        // Each CJK char is two columns wide
        let cut = truncate("宇宙飛行", 5);
        assert_eq!(cut, "宇宙…");
        assert!(cut.width() <= 5);
    }

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_frame(0), spinner_frame(10));
        assert_ne!(spinner_frame(0), spinner_frame(1));
    }
}
