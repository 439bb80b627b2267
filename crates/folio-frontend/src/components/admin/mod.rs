//! Building blocks of the admin dashboard.

pub mod message_detail;
pub mod message_list;
pub mod project_form;
pub mod project_list;

pub use message_detail::*;
pub use message_list::*;
pub use project_form::*;
pub use project_list::*;

use folio::chrono::{DateTime, Local, Utc};

/// Message timestamp in the visitor's local time, blank when the record has none.
pub(crate) fn format_timestamp(timestamp: Option<&DateTime<Utc>>) -> String {
    timestamp
        .map(|at| at.with_timezone(&Local).format("%b %-d, %Y %H:%M").to_string())
        .unwrap_or_default()
}
