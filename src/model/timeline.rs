use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::phase::PositionedPhase;

/// The padded date range visible on the timeline axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineWindow {
    /// First day of the window (inclusive).
    pub start: NaiveDate,
    /// Last day of the window (inclusive).
    pub end: NaiveDate,
    /// Inclusive day count, `(end - start) + 1`. Zero only for the
    /// degenerate window of an empty timeline.
    pub total_days: i64,
}

impl TimelineWindow {
    /// Window anchored on `today` with no extent, used when there are no
    /// phases to position. `total_days == 0` keeps it out of any division.
    pub fn degenerate(today: NaiveDate) -> Self {
        Self {
            start: today,
            end: today,
            total_days: 0,
        }
    }

    /// Whether a date falls inside the window (both bounds inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// One calendar month clipped to the window, for axis headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSegment {
    /// Header text, e.g. "Jan 2024".
    pub label: String,
    /// First window day covered by this month.
    pub start: NaiveDate,
    /// Last window day covered by this month.
    pub end: NaiveDate,
    pub left_percent: f64,
    pub width_percent: f64,
}

/// The complete render-ready timeline description. Derived, immutable, and
/// recomputed from scratch on every input change; callers treat it as
/// read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineResult {
    /// Valid, deduplicated phases, ascending by start date (stable).
    pub phases: Vec<PositionedPhase>,
    pub window: TimelineWindow,
    /// Contiguous month headers tiling the window.
    pub months: Vec<MonthSegment>,
    /// Position of the today marker, `None` when today lies outside the
    /// window (the marker is simply not rendered).
    pub today_percent: Option<f64>,
    /// True when no phase survived validation and dedup.
    pub is_empty: bool,
    /// How many input phases were dropped for missing, unparsable, or
    /// inverted dates.
    pub invalid_count: usize,
}
