use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::model::{DateInput, PhaseInput, ValidatedPhase};

/// Why a phase was excluded from the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhaseDateError {
    #[error("start or end date is missing")]
    MissingDate,
    #[error("unparsable date: {0:?}")]
    Unparsable(String),
    /// Inverted ranges are dropped, never swapped, so upstream data errors
    /// stay visible instead of being silently repaired.
    #[error("start {start} is after end {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

/// Try parsing a date string with several common formats, ISO-8601 first.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    for fmt in &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y/%m/%d", "%m-%d-%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    // Full ISO-8601 timestamps carry a usable date too.
    s.parse::<chrono::NaiveDateTime>().map(|dt| dt.date()).ok()
}

/// Resolve one optional input date to a concrete calendar date.
fn normalize(input: Option<&DateInput>) -> Result<NaiveDate, PhaseDateError> {
    match input {
        None => Err(PhaseDateError::MissingDate),
        Some(DateInput::Date(d)) => Ok(*d),
        Some(DateInput::Text(s)) => {
            parse_date(s).ok_or_else(|| PhaseDateError::Unparsable(s.clone()))
        }
    }
}

/// Validate a single phase: both dates must resolve and be ordered.
pub fn check_phase(phase: &PhaseInput) -> Result<ValidatedPhase, PhaseDateError> {
    let start = normalize(phase.start_date.as_ref())?;
    let end = normalize(phase.end_date.as_ref())?;
    if start > end {
        return Err(PhaseDateError::InvertedRange { start, end });
    }
    Ok(ValidatedPhase {
        id: phase.id.clone(),
        name: phase.name.clone(),
        status: phase.status,
        start,
        end,
    })
}

/// Validate a batch of phases, preserving input order.
///
/// Returns the surviving phases and the count of dropped ones. Invalid
/// entries are counted and skipped, never raised as errors.
pub fn validate_phases(phases: &[PhaseInput]) -> (Vec<ValidatedPhase>, usize) {
    let mut valid = Vec::with_capacity(phases.len());
    let mut invalid = 0usize;

    for phase in phases {
        match check_phase(phase) {
            Ok(v) => valid.push(v),
            Err(e) => {
                debug!(id = %phase.id, error = %e, "dropping phase");
                invalid += 1;
            }
        }
    }

    (valid, invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn iso_string_dates_parse() {
        let phase = PhaseInput::new("a", "Design", "2024-01-10", "2024-01-20");
        let v = check_phase(&phase).unwrap();
        assert_eq!(v.start, date(2024, 1, 10));
        assert_eq!(v.end, date(2024, 1, 20));
    }

    #[test]
    fn native_dates_pass_through() {
        let phase = PhaseInput::new("a", "Design", date(2024, 2, 1), date(2024, 2, 3));
        assert!(check_phase(&phase).is_ok());
    }

    #[test]
    fn common_fallback_formats_parse() {
        // Day-first wins when both readings are plausible; month-first
        // dashed dates still resolve once the day field overflows.
        let cases = [
            ("25/12/2024", date(2024, 12, 25)),
            ("25-12-2024", date(2024, 12, 25)),
            ("25.12.2024", date(2024, 12, 25)),
            ("2024/12/25", date(2024, 12, 25)),
            ("12-25-2024", date(2024, 12, 25)),
        ];
        for (text, expected) in cases {
            let phase = PhaseInput::new("a", "", text, text);
            let v = check_phase(&phase).unwrap();
            assert_eq!(v.start, expected, "format {text:?}");
        }
    }

    #[test]
    fn missing_start_is_invalid() {
        let mut phase = PhaseInput::new("b", "Build", "2024-01-01", "2024-01-20");
        phase.start_date = None;
        assert_eq!(check_phase(&phase), Err(PhaseDateError::MissingDate));
    }

    #[test]
    fn garbage_text_is_invalid() {
        let phase = PhaseInput::new("c", "Test", "soonish", "2024-01-20");
        assert!(matches!(
            check_phase(&phase),
            Err(PhaseDateError::Unparsable(_))
        ));
    }

    #[test]
    fn inverted_range_is_dropped_not_swapped() {
        let phase = PhaseInput::new("d", "Ship", "2024-03-05", "2024-03-01");
        assert!(matches!(
            check_phase(&phase),
            Err(PhaseDateError::InvertedRange { .. })
        ));
    }

    #[test]
    fn batch_counts_drops_and_keeps_order() {
        let phases = vec![
            PhaseInput::new("a", "", "2024-01-01", "2024-01-05"),
            PhaseInput::new("b", "", "nope", "2024-01-05"),
            PhaseInput::new("c", "", "2024-02-01", "2024-02-05"),
        ];
        let (valid, invalid) = validate_phases(&phases);
        assert_eq!(invalid, 1);
        let ids: Vec<&str> = valid.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }
}
