//! Coordinate assignment.

use tracing::debug;

use crate::config::Settings;
use crate::model::{Event, EventTypeTable, HostIdx, HostRegistry};

use super::types::{ClickInfo, DiagramLayout, EventArrow, LifelineBox};

/// Vertical gap between the title boxes and the event layer.
const TIME_TOP_PAD: f64 = 10.0;
/// Color used for an event whose type carries no style.
const FALLBACK_COLOR: &str = "#000000";
const FALLBACK_FONT_SIZE: f64 = 3.6;

/// Assign coordinates to hosts and events.
///
/// Precondition: at least one host and one event. Callers reject empty
/// inputs before invoking layout; this function indexes into both
/// collections and will panic otherwise.
///
/// Host title boxes are mutated in place (position, lifeline extent) as
/// well as being copied into the returned document, so a caller holding
/// the registry sees the computed geometry too.
pub fn layout_diagram(
    registry: &mut HostRegistry,
    events: &[Event],
    event_types: &EventTypeTable,
    settings: &Settings,
) -> DiagramLayout {
    let time_top = registry.hosts()[0].title_box.height + TIME_TOP_PAD;
    let time_left = settings.left_margin;

    // Lanes left to right in registry order.
    for (i, host) in registry.hosts_mut().iter_mut().enumerate() {
        host.title_box.x = settings.left_margin + i as f64 * settings.host_spacing;
        host.title_box.y = 0.0;
    }

    // Each lifeline runs just past the last event its host takes part in,
    // not the global last event.
    for (i, host) in registry.hosts_mut().iter_mut().enumerate() {
        let last_elapsed = events
            .iter()
            .filter(|e| e.src == HostIdx(i) || e.dst == HostIdx(i))
            .map(|e| e.elapsed)
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))));
        host.title_box.lifeline_end = match last_elapsed {
            Some(elapsed) => time_top + elapsed * settings.time_scale + host.title_box.height,
            None => time_top,
        };
    }

    let arrows: Vec<EventArrow> = events
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let src_box = &registry.get(e.src).title_box;
            let dst_box = &registry.get(e.dst).title_box;
            let x = src_box.center_x();
            let dx = dst_box.center_x() - x;

            let style = event_types.get(&e.event_type);
            let color = style
                .map(|s| s.color.clone())
                .unwrap_or_else(|| FALLBACK_COLOR.to_string());
            let font_size = style.map(|s| s.font_size).unwrap_or(FALLBACK_FONT_SIZE);

            // Label legibility only; closely stacked arrows get their
            // labels spread out a little, deterministically.
            let label_x = x + dx / 2.0 + label_jitter(i, e) * dx;

            let suppressed = e
                .prev
                .map(|p| e.time.secs_since(events[p].time) < settings.min_label_gap)
                .unwrap_or(false);
            let time_label = if suppressed {
                None
            } else {
                Some(e.time_label.clone())
            };

            EventArrow {
                y: (e.elapsed * settings.time_scale).round() as i64,
                x,
                dx,
                label: e.event_type.clone(),
                label_x,
                time_label,
                color,
                font_size,
                latency: e.latency,
                click: ClickInfo {
                    time: e.time.render(),
                    event_type: e.event_type.clone(),
                    packet_id: e.packet_id,
                    ack_packet_id: e.ack_packet_id,
                    ack_time: e.ack_time,
                },
            }
        })
        .collect();

    let last_host = registry
        .hosts()
        .last()
        .expect("layout requires at least one host");
    let last_arrow_y = arrows
        .last()
        .map(|a| a.y as f64)
        .expect("layout requires at least one event");

    let width = registry.len() as f64 * settings.host_spacing
        + settings.left_margin
        + last_host.title_box.width;
    let height = time_top + last_arrow_y + settings.bottom_margin;

    let hosts = registry
        .hosts()
        .iter()
        .map(|h| LifelineBox {
            host_id: h.id.clone(),
            name: h.name.clone(),
            ip: h.ip.clone(),
            description: h.description.clone(),
            x: h.title_box.x,
            y: h.title_box.y,
            width: h.title_box.width,
            height: h.title_box.height,
            bg_color: h.title_box.bg_color.clone(),
            font_size: h.title_box.font_size,
            font_color: h.title_box.font_color.clone(),
            lane_x: h.title_box.center_x(),
            lifeline_end: h.title_box.lifeline_end,
        })
        .collect();

    debug!(width, height, events = arrows.len(), "layout computed");

    DiagramLayout {
        width,
        height,
        time_left,
        time_top,
        hosts,
        events: arrows,
    }
}

/// Bounded pseudo-random label offset in [-0.25, 0.25] of the arrow
/// length. Stable FNV-1a over the event's identity so diagrams are
/// reproducible run to run (do not use `DefaultHasher`, it is randomized).
fn label_jitter(index: usize, e: &Event) -> f64 {
    let mut hash: u64 = 14695981039346656037;
    let mut mix = |bytes: &[u8]| {
        for b in bytes {
            hash ^= *b as u64;
            hash = hash.wrapping_mul(1099511628211);
        }
    };
    mix(&(index as u64).to_le_bytes());
    mix(&e.packet_id.unwrap_or(0).to_le_bytes());
    mix(e.event_type.as_bytes());
    (hash % 1001) as f64 / 1000.0 * 0.5 - 0.25
}
