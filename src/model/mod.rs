//! Data model: hosts, events, event types and timestamps.
//!
//! Hosts live in a [`HostRegistry`]; events reference them by index
//! ([`HostIdx`]) rather than by pointer, so the whole timeline stays a
//! plain owned `Vec` that later passes can borrow and annotate.

mod event;
mod host;
mod id;
mod time;

pub use event::{Event, EventType, EventTypeTable, Latency, LatencyThresholds};
pub use host::{Host, HostKind, HostRegistry, TitleBox};
pub use id::HostIdx;
pub use time::Timestamp;
