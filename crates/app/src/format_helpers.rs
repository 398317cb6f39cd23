//! Shared formatting utilities for the UI layer.

use chrono::{DateTime, Utc};

/// Short month name for a due-date chip, e.g. "Mar".
pub fn due_month(due: &DateTime<Utc>) -> String {
    due.format("%b").to_string()
}

/// Day of month without padding, e.g. "6".
pub fn due_day(due: &DateTime<Utc>) -> String {
    due.format("%-d").to_string()
}

/// 12-hour time, e.g. "11:00 PM".
pub fn due_time(due: &DateTime<Utc>) -> String {
    due.format("%-I:%M %p").to_string()
}

/// Score line for a graded activity, e.g. "46 / 50".
pub fn score_line(grade: Option<u32>, max_grade: u32) -> Option<String> {
    grade.map(|g| format!("{g} / {max_grade}"))
}
