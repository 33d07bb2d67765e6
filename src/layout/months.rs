use crate::layout::position::span_percent;
use crate::layout::window::{end_of_month, next_month, start_of_month};
use crate::model::{MonthSegment, TimelineWindow};

/// Enumerate the calendar months intersecting the window, each clipped to
/// the window bounds. Segments come back ordered, contiguous, and
/// non-overlapping; together they tile exactly `[window.start, window.end]`.
pub fn month_segments(window: &TimelineWindow) -> Vec<MonthSegment> {
    let mut segments = Vec::new();
    if window.total_days == 0 {
        return segments;
    }

    let mut month = start_of_month(window.start);
    while month <= window.end {
        let effective_start = month.max(window.start);
        let effective_end = end_of_month(month).min(window.end);

        if effective_start <= effective_end {
            let (left_percent, width_percent) =
                span_percent(window, effective_start, effective_end);
            segments.push(MonthSegment {
                label: month.format("%b %Y").to_string(),
                start: effective_start,
                end: effective_end,
                left_percent,
                width_percent,
            });
        }

        month = next_month(month);
    }

    segments
}
