pub mod phase;
pub mod timeline;

pub use phase::{DateInput, PhaseInput, PhaseStatus, PositionedPhase, ValidatedPhase};
pub use timeline::{MonthSegment, TimelineResult, TimelineWindow};
