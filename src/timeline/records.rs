//! Tabular event records.
//!
//! Columns: `time, src, dst, eventType, ackTime, packetId, ackPacketId`.
//! The trailing three are optional and default to absent when empty.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::model::{Event, EventTypeTable, HostRegistry, Timestamp};

use super::normalize::sort_and_process;

const HEADER: [&str; 7] = [
    "time",
    "src",
    "dst",
    "eventType",
    "ackTime",
    "packetId",
    "ackPacketId",
];

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record file error: {0}")]
    Csv(#[from] csv::Error),
    #[error("record file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read events from a CSV source and return them normalized.
///
/// Malformed rows (blank first field, comment rows, fewer than four
/// fields) are skipped silently; rows naming an unregistered event type
/// or an unknown host are skipped with a diagnostic.
pub fn read_events(
    path: &Path,
    registry: &HostRegistry,
    event_types: &EventTypeTable,
    settings: &Settings,
) -> Result<Vec<Event>, RecordError> {
    debug!(path = %path.display(), "reading event records");
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_path(path)?;

    let mut events = Vec::new();
    for row in reader.records() {
        let row = row?;
        if row.len() < 4 {
            continue;
        }
        let time_field = &row[0];
        if time_field.is_empty() || time_field.starts_with('#') {
            continue;
        }
        let Ok(time) = Timestamp::parse(time_field) else {
            warn!(row = ?row, "skipping record with unparseable timestamp");
            continue;
        };
        let Some(src) = registry.match_host(&row[1]) else {
            warn!(host = &row[1], "skipping record with unknown source host");
            continue;
        };
        let Some(dst) = registry.match_host(&row[2]) else {
            warn!(host = &row[2], "skipping record with unknown destination host");
            continue;
        };
        let type_name = &row[3];
        if !event_types.contains_key(type_name) {
            warn!(event_type = type_name, "dropping event with unregistered type");
            continue;
        }

        let mut event = Event::new(time, src, dst, type_name);
        if let Some(field) = row.get(4).filter(|f| !f.is_empty()) {
            match field.parse::<f64>() {
                Ok(secs) => event.set_ack_time(secs, &settings.latency),
                Err(_) => warn!(value = field, "ignoring unparseable ack time"),
            }
        }
        if let Some(field) = row.get(5).filter(|f| !f.is_empty()) {
            event.packet_id = field.parse().ok();
        }
        if let Some(field) = row.get(6).filter(|f| !f.is_empty()) {
            event.ack_packet_id = field.parse().ok();
        }
        events.push(event);
    }

    sort_and_process(&mut events, settings);
    debug!(count = events.len(), "event records read");
    Ok(events)
}

/// Write events back out in the same tabular format.
pub fn write_events(
    path: &Path,
    events: &[Event],
    registry: &HostRegistry,
) -> Result<(), RecordError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADER)?;
    for e in events {
        let opt_f64 = |v: Option<f64>| v.map(|x| x.to_string()).unwrap_or_default();
        let opt_u64 = |v: Option<u64>| v.map(|x| x.to_string()).unwrap_or_default();
        writer.write_record([
            e.time.render(),
            registry.get(e.src).id.clone(),
            registry.get(e.dst).id.clone(),
            e.event_type.clone(),
            opt_f64(e.ack_time),
            opt_u64(e.packet_id),
            opt_u64(e.ack_packet_id),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
