//! Launch date formatting
//!
//! Dates are always rendered in UTC so the same launch reads identically on
//! every machine.

use chrono::{DateTime, Utc};

/// Date shown in the launch table.
pub const LIST_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date shown on the launch detail view (`MM-DD-YYYY HH:mm`).
pub const DETAIL_DATE_FORMAT: &str = "%m-%d-%Y %H:%M";

pub fn format_list_date(date: &DateTime<Utc>) -> String {
    date.format(LIST_DATE_FORMAT).to_string()
}

pub fn format_detail_date(date: &DateTime<Utc>) -> String {
    date.format(DETAIL_DATE_FORMAT).to_string()
}
