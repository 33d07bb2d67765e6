use chrono::{Datelike, NaiveDate};

use crate::model::{TimelineWindow, ValidatedPhase};

/// First day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    next_month(start_of_month(date)) - chrono::Duration::days(1)
}

/// First day of the month after the one containing `date`.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    let (y, m) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1).unwrap_or(date + chrono::Duration::days(30))
}

/// First day of the month before the one containing `date`.
pub fn prev_month(date: NaiveDate) -> NaiveDate {
    let (y, m) = if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1).unwrap_or(date - chrono::Duration::days(30))
}

/// Compute the padded global window for a non-empty set of validated phases:
/// one calendar month of slack before the earliest start and after the
/// latest end, both snapped to month boundaries.
///
/// The caller guarantees `phases` is non-empty; the assembler short-circuits
/// to a degenerate window before ever reaching this point.
pub fn compute_window(phases: &[ValidatedPhase]) -> TimelineWindow {
    debug_assert!(!phases.is_empty());

    let min_start = phases.iter().map(|p| p.start).min().unwrap_or_default();
    let max_end = phases.iter().map(|p| p.end).max().unwrap_or_default();

    let start = prev_month(min_start);
    let end = end_of_month(next_month(max_end));

    TimelineWindow {
        start,
        end,
        total_days: (end - start).num_days() + 1,
    }
}
