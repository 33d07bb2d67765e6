use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Workflow status of a phase. Carried through for caller-side color
/// mapping; the layout pipeline never inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Delayed,
}

/// A date as it arrives from the outside: either an already-constructed
/// calendar date or raw text that still needs parsing.
///
/// This is the single place in the crate that knows about the two accepted
/// input shapes; everything downstream works on `NaiveDate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    Date(NaiveDate),
    Text(String),
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

/// A raw project phase as supplied by the caller. Untrusted: dates may be
/// missing, malformed, or inverted, and `id` values may repeat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseInput {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start_date: Option<DateInput>,
    #[serde(default)]
    pub end_date: Option<DateInput>,
    #[serde(default)]
    pub status: PhaseStatus,
}

impl PhaseInput {
    /// Build a phase from string dates, the common case in tests and imports.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start: impl Into<DateInput>,
        end: impl Into<DateInput>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_date: Some(start.into()),
            end_date: Some(end.into()),
            status: PhaseStatus::default(),
        }
    }
}

/// A phase that survived validation: both dates parsed and `start <= end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedPhase {
    pub id: String,
    pub name: String,
    pub status: PhaseStatus,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// A validated phase plus its horizontal placement on the timeline axis,
/// expressed as percentages of the window's total span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedPhase {
    pub phase: ValidatedPhase,
    pub left_percent: f64,
    pub width_percent: f64,
}
