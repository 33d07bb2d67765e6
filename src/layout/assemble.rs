use chrono::NaiveDate;
use tracing::debug;

use crate::layout::dedup::dedup_phases;
use crate::layout::months::month_segments;
use crate::layout::position::{span_percent, today_percent};
use crate::layout::validate::validate_phases;
use crate::layout::window::compute_window;
use crate::model::{PhaseInput, PositionedPhase, TimelineResult, TimelineWindow};

/// Compute a render-ready timeline from raw phases, with the today marker
/// anchored on the local calendar date.
pub fn compute_timeline(phases: &[PhaseInput]) -> TimelineResult {
    compute_timeline_at(phases, chrono::Local::now().date_naive())
}

/// Compute a render-ready timeline with an explicit `today`.
///
/// Total function: malformed, duplicated, empty, or absent input all
/// produce a well-formed result. Invalid phases are counted and excluded,
/// never surfaced as errors.
pub fn compute_timeline_at(phases: &[PhaseInput], today: NaiveDate) -> TimelineResult {
    let (valid, invalid_count) = validate_phases(phases);
    let valid = dedup_phases(valid);

    if valid.is_empty() {
        debug!(invalid_count, "no valid phases, returning empty timeline");
        return TimelineResult {
            phases: Vec::new(),
            window: TimelineWindow::degenerate(today),
            months: Vec::new(),
            today_percent: None,
            is_empty: true,
            invalid_count,
        };
    }

    let window = compute_window(&valid);

    let mut positioned: Vec<PositionedPhase> = valid
        .into_iter()
        .map(|phase| {
            let (left_percent, width_percent) = span_percent(&window, phase.start, phase.end);
            PositionedPhase {
                phase,
                left_percent,
                width_percent,
            }
        })
        .collect();
    // Stable sort keeps input order among phases sharing a start date.
    positioned.sort_by_key(|p| p.phase.start);

    TimelineResult {
        months: month_segments(&window),
        today_percent: today_percent(&window, today),
        phases: positioned,
        window,
        is_empty: false,
        invalid_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_input_short_circuits() {
        let result = compute_timeline_at(&[], date(2024, 1, 1));
        assert!(result.is_empty);
        assert!(result.phases.is_empty());
        assert!(result.months.is_empty());
        assert_eq!(result.today_percent, None);
        assert_eq!(result.invalid_count, 0);
        assert_eq!(result.window.total_days, 0);
    }

    #[test]
    fn all_invalid_input_reports_count() {
        let phases = vec![PhaseInput {
            start_date: None,
            ..PhaseInput::new("b", "Broken", "x", "2024-01-20")
        }];
        let result = compute_timeline_at(&phases, date(2024, 1, 1));
        assert!(result.is_empty);
        assert_eq!(result.invalid_count, 1);
    }

    #[test]
    fn phases_sort_by_start_with_stable_ties() {
        let phases = vec![
            PhaseInput::new("late", "", "2024-03-01", "2024-03-10"),
            PhaseInput::new("tie-b", "", "2024-01-05", "2024-01-08"),
            PhaseInput::new("tie-a", "", "2024-01-05", "2024-02-01"),
        ];
        let result = compute_timeline_at(&phases, date(2024, 1, 1));
        let ids: Vec<&str> = result.phases.iter().map(|p| p.phase.id.as_str()).collect();
        assert_eq!(ids, ["tie-b", "tie-a", "late"]);
    }

    #[test]
    fn mixed_valid_and_invalid_keeps_going() {
        let phases = vec![
            PhaseInput::new("ok", "Design", "2024-01-10", "2024-01-20"),
            PhaseInput::new("bad", "Build", "not a date", "2024-01-20"),
        ];
        let result = compute_timeline_at(&phases, date(2024, 1, 15));
        assert!(!result.is_empty);
        assert_eq!(result.phases.len(), 1);
        assert_eq!(result.invalid_count, 1);
    }
}
