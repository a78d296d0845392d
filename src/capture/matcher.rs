//! Request/acknowledgement matching over a packet stream.

use tracing::{debug, warn};

use crate::config::Settings;
use crate::model::{Event, EventTypeTable, HostRegistry};
use crate::timeline::sort_and_process;

use super::packet::{CapturePacket, PacketBody};

/// Scan a packet sequence and produce normalized events.
///
/// Requests become events (source and destination resolved by address
/// against the registry, type resolved from the payload tag). A later ack
/// is correlated to its request by frame number and sets that event's ack
/// latency. Packets that resolve to nothing are diagnostics, never fatal.
/// Packet arrival order must be preserved by the caller; correlation
/// assumes a request is seen before its ack.
pub fn match_capture(
    packets: impl IntoIterator<Item = CapturePacket>,
    registry: &HostRegistry,
    event_types: &EventTypeTable,
    settings: &Settings,
) -> Vec<Event> {
    let mut events: Vec<Event> = Vec::new();

    for pkt in packets {
        match pkt.body {
            PacketBody::Request { event_type } => {
                let Some(src) = registry.match_host(&pkt.src_ip) else {
                    warn!(frame = pkt.number, ip = %pkt.src_ip, "request from unknown host");
                    continue;
                };
                let Some(dst) = registry.match_host(&pkt.dst_ip) else {
                    warn!(frame = pkt.number, ip = %pkt.dst_ip, "request to unknown host");
                    continue;
                };
                if !event_types.contains_key(&event_type) {
                    warn!(
                        frame = pkt.number,
                        event_type, "dropping request with unregistered type"
                    );
                    continue;
                }
                let mut event = Event::new(pkt.time, src, dst, event_type);
                event.packet_id = Some(pkt.number);
                events.push(event);
            }
            PacketBody::Ack {
                request_frame,
                ack_latency,
            } => {
                match events
                    .iter_mut()
                    .find(|e| e.packet_id == Some(request_frame))
                {
                    Some(event) => {
                        event.set_ack_time(ack_latency, &settings.latency);
                        event.ack_packet_id = Some(pkt.number);
                    }
                    None => {
                        warn!(
                            frame = pkt.number,
                            request_frame, "no event found for acknowledged request frame"
                        );
                    }
                }
            }
            PacketBody::Other => {}
        }
    }

    sort_and_process(&mut events, settings);
    debug!(count = events.len(), "capture matched");
    events
}
