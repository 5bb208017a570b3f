// ⏰ Wall clock
// The current year is read fresh on every call, never cached.

use chrono::{Datelike, Local};

/// Current calendar year in the host's local time zone
pub fn current_year() -> i32 {
    Local::now().year()
}
