//! Events and event types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::id::HostIdx;
use super::time::Timestamp;

/// Rendering style registered once per diagram, referenced by name from
/// event records.
#[derive(Debug, Clone)]
pub struct EventType {
    pub name: String,
    pub color: String,
    pub font_size: f64,
}

impl EventType {
    pub const DEFAULT_FONT_SIZE: f64 = 3.6;

    pub fn new(name: impl Into<String>, color: impl Into<String>) -> EventType {
        EventType {
            name: name.into(),
            color: color.into(),
            font_size: Self::DEFAULT_FONT_SIZE,
        }
    }
}

/// Event types keyed by name.
pub type EventTypeTable = HashMap<String, EventType>;

/// Acknowledgement latency buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Latency {
    Fast,
    Normal,
    Slow,
    VerySlow,
}

/// Classification boundaries, in seconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LatencyThresholds {
    /// Below this an ack is fast.
    pub fast: f64,
    /// Below this (and at or above `fast`) an ack is normal.
    pub slow: f64,
    /// Below this (and at or above `slow`) an ack is slow; anything at or
    /// above is very slow.
    pub very_slow: f64,
}

impl Default for LatencyThresholds {
    fn default() -> LatencyThresholds {
        LatencyThresholds {
            fast: 0.001,
            slow: 0.01,
            very_slow: 0.1,
        }
    }
}

impl Latency {
    /// Bucket an ack latency. First bucket whose upper bound is not
    /// exceeded wins, so the same input always yields the same bucket.
    pub fn classify(ack_secs: f64, thresholds: &LatencyThresholds) -> Latency {
        if ack_secs < thresholds.fast {
            Latency::Fast
        } else if ack_secs < thresholds.slow {
            Latency::Normal
        } else if ack_secs < thresholds.very_slow {
            Latency::Slow
        } else {
            Latency::VerySlow
        }
    }
}

/// A timed interaction between two hosts.
///
/// Created by the timeline normalizer from one raw record (or by the
/// capture matcher from one request packet). `elapsed`, `time_label` and
/// the `prev`/`next` neighbor indices are derived during
/// [`sort_and_process`](crate::timeline::sort_and_process) and not
/// touched afterwards.
#[derive(Debug, Clone)]
pub struct Event {
    pub time: Timestamp,
    pub src: HostIdx,
    pub dst: HostIdx,
    pub event_type: String,
    /// Seconds since the first event of the timeline, after gap
    /// compression. Exactly zero for the first event.
    pub elapsed: f64,
    /// Human-readable time label shown next to the arrow.
    pub time_label: String,
    /// Acknowledgement latency in seconds, when the ack was observed.
    pub ack_time: Option<f64>,
    /// Derived from `ack_time`; recomputed whenever `ack_time` is set.
    pub latency: Option<Latency>,
    /// Frame number of the originating packet in the capture, if any.
    pub packet_id: Option<u64>,
    /// Frame number of the acknowledging packet, if any.
    pub ack_packet_id: Option<u64>,
    /// Index of the previous event in time order (absent at the start).
    pub prev: Option<usize>,
    /// Index of the next event in time order (absent at the end).
    pub next: Option<usize>,
}

impl Event {
    pub fn new(time: Timestamp, src: HostIdx, dst: HostIdx, event_type: impl Into<String>) -> Event {
        Event {
            time,
            src,
            dst,
            event_type: event_type.into(),
            elapsed: 0.0,
            time_label: String::new(),
            ack_time: None,
            latency: None,
            packet_id: None,
            ack_packet_id: None,
            prev: None,
            next: None,
        }
    }

    /// Record the acknowledgement latency. Setting the ack time is the
    /// single place the latency classification is computed.
    pub fn set_ack_time(&mut self, ack_secs: f64, thresholds: &LatencyThresholds) {
        self.ack_time = Some(ack_secs);
        self.latency = Some(Latency::classify(ack_secs, thresholds));
    }
}
