use chrono::NaiveDate;

use crate::model::TimelineWindow;

/// Horizontal offset of `date` as a percentage of the window span.
///
/// Only meaningful for a real window; the assembler never maps positions
/// against a degenerate (`total_days == 0`) window.
pub fn left_percent(window: &TimelineWindow, date: NaiveDate) -> f64 {
    let days = (date - window.start).num_days() as f64;
    days / window.total_days as f64 * 100.0
}

/// Offset and width of the inclusive interval `[start, end]`, as
/// percentages of the window span.
pub fn span_percent(window: &TimelineWindow, start: NaiveDate, end: NaiveDate) -> (f64, f64) {
    let left = left_percent(window, start);
    let days = (end - start).num_days() as f64 + 1.0;
    let width = days / window.total_days as f64 * 100.0;
    (left, width)
}

/// Position of the today marker, or `None` when today falls outside the
/// window. The marker sits at the right edge of today's one-day cell, so a
/// `today` equal to `window.end` lands exactly on 100.
pub fn today_percent(window: &TimelineWindow, today: NaiveDate) -> Option<f64> {
    if window.total_days == 0 || !window.contains(today) {
        return None;
    }
    let days = (today - window.start).num_days() as f64 + 1.0;
    Some(days / window.total_days as f64 * 100.0)
}
