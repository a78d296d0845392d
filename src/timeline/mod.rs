//! Event timeline: record ingestion and normalization.
//!
//! Raw records come from a CSV source or from the capture matcher; either
//! way [`sort_and_process`] turns the unordered collection into a
//! validated, time-ordered, gap-compressed sequence.

mod normalize;
mod records;

pub use normalize::sort_and_process;
pub use records::{read_events, write_events, RecordError};
