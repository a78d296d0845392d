//! Capture adapter: turn a packet stream into events.
//!
//! The capture library itself stays external; this module only defines
//! the decoded packet shape and the request/ack matcher.

mod matcher;
mod packet;

pub use matcher::match_capture;
pub use packet::{CapturePacket, PacketBody};
