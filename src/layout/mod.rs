pub mod assemble;
pub mod dedup;
pub mod months;
pub mod position;
pub mod validate;
pub mod window;

pub use assemble::{compute_timeline, compute_timeline_at};
pub use validate::PhaseDateError;
