//! Decoded capture packets.
//!
//! The capture-reading library (or an export from it) hands us packets
//! already filtered to relevant traffic and already decoded to the few
//! fields the matcher needs. A packet dump is a JSON array of these.

use serde::{Deserialize, Serialize};

use crate::model::Timestamp;

/// What the packet carries, as far as matching is concerned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PacketBody {
    /// An HTTP POST whose XML payload names an event type.
    Request { event_type: String },
    /// An HTTP 200 acknowledging an earlier request frame.
    Ack {
        /// Frame number of the request being acknowledged.
        request_frame: u64,
        /// Relative TCP time of the ack, seconds.
        ack_latency: f64,
    },
    /// Anything else in the stream; ignored by the matcher.
    Other,
}

/// One packet from the capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapturePacket {
    /// Frame number within the capture.
    pub number: u64,
    pub time: Timestamp,
    pub src_ip: String,
    pub dst_ip: String,
    #[serde(flatten)]
    pub body: PacketBody,
}
