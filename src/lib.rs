//! Pure layout engine for project-phase timelines.
//!
//! Feed it an untrusted list of phases (dates possibly missing, malformed,
//! or inverted; ids possibly duplicated) and get back a render-ready
//! description: phases positioned as `left%`/`width%` on a padded window,
//! month headers tiling the axis, and a today marker. The pipeline never
//! panics; bad phases are counted and dropped.
//!
//! ```
//! use phase_timeline::{compute_timeline, PhaseInput};
//!
//! let phases = vec![PhaseInput::new("a", "Design", "2024-01-10", "2024-01-20")];
//! let timeline = compute_timeline(&phases);
//! assert!(!timeline.is_empty);
//! assert_eq!(timeline.months.len(), 3); // Dec, Jan, Feb
//! ```
//!
//! Rendering (bars, tooltips, colors) and data access are the caller's
//! concern; everything here is a pure function of its input, so results
//! can be memoized on a content hash of the phase list.

pub mod import;
pub mod layout;
pub mod model;

pub use layout::{compute_timeline, compute_timeline_at, PhaseDateError};
pub use model::{
    DateInput, MonthSegment, PhaseInput, PhaseStatus, PositionedPhase, TimelineResult,
    TimelineWindow, ValidatedPhase,
};
