//! Geometry handed to a rendering backend.
//!
//! The backend (SVG writer, interactive viewer) consumes this document
//! as-is; nothing here knows about markup. Everything is serializable so
//! a diagram can also be dumped as JSON and replayed offline.

use serde::{Deserialize, Serialize};

use crate::model::Latency;

/// One host lane: title box plus lifeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifelineBox {
    pub host_id: String,
    pub name: String,
    pub ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub bg_color: String,
    pub font_size: f64,
    pub font_color: String,
    /// Horizontal center of the lane; the lifeline and every arrow
    /// endpoint sit on this x.
    pub lane_x: f64,
    /// Absolute y where the lifeline stops.
    pub lifeline_end: f64,
}

/// Inspection metadata attached to an arrow for interactive backends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickInfo {
    pub time: String,
    pub event_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packet_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ack_packet_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ack_time: Option<f64>,
}

/// One event: a horizontal arrow between two lanes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventArrow {
    /// Vertical position within the event layer (elapsed time scaled,
    /// rounded to a whole unit).
    pub y: i64,
    /// Source lane center.
    pub x: f64,
    /// Signed arrow length: destination lane center minus source lane
    /// center. Negative means the arrow points left.
    pub dx: f64,
    /// Event-type label and where to put it.
    pub label: String,
    pub label_x: f64,
    /// Elapsed-time label; absent when suppressed for being too close to
    /// the previous event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_label: Option<String>,
    pub color: String,
    pub font_size: f64,
    /// Ack latency bucket; backends pick the arrowhead marker from this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency: Option<Latency>,
    pub click: ClickInfo,
}

/// A fully positioned diagram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramLayout {
    pub width: f64,
    pub height: f64,
    /// Left edge of the event layer.
    pub time_left: f64,
    /// Top edge of the event layer; arrow `y` values are relative to it.
    pub time_top: f64,
    pub hosts: Vec<LifelineBox>,
    pub events: Vec<EventArrow>,
}
