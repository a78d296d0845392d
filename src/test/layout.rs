use crate::config::{self, ConfigSpec, Settings};
use crate::layout::layout_diagram;
use crate::model::Latency;
use crate::timeline::sort_and_process;

use super::util::{ev, fixture};

fn two_host_fixture() -> (
    crate::model::HostRegistry,
    crate::model::EventTypeTable,
    Settings,
) {
    let spec: ConfigSpec = serde_json::from_value(serde_json::json!({
        "hosts": [
            {"id": "a", "name": "A", "ip": "10.0.0.1", "host_type": "server", "sort_nudge": 0},
            {"id": "b", "name": "B", "ip": "10.0.0.2", "host_type": "client", "sort_nudge": 1}
        ],
        "eventTypes": [
            {"eventType": "Ping", "color": "#ff0000"}
        ]
    }))
    .expect("spec");
    config::from_spec(spec).expect("config")
}

#[test]
fn end_to_end_two_hosts_two_events() {
    let (mut registry, event_types, settings) = two_host_fixture();
    let mut events = vec![ev(0.0, 0, 1, "Ping"), ev(0.5, 1, 0, "Ping")];
    sort_and_process(&mut events, &settings);

    let doc = layout_diagram(&mut registry, &events, &event_types, &settings);

    // Lanes left to right: x = left_margin + i * host_spacing.
    assert_eq!(doc.hosts[0].x, 20.0);
    assert_eq!(doc.hosts[1].x, 80.0);
    assert_eq!(doc.hosts[0].lane_x, 40.0);
    assert_eq!(doc.hosts[1].lane_x, 100.0);

    // First event at elapsed 0, pointing right; second at 0.5 s, left.
    assert_eq!(doc.events[0].y, 0);
    assert_eq!(doc.events[0].x, 40.0);
    assert_eq!(doc.events[0].dx, 60.0);
    assert_eq!(doc.events[1].y, 3); // 0.5 s * 5 units/s, rounded
    assert_eq!(doc.events[1].x, 100.0);
    assert_eq!(doc.events[1].dx, -60.0);

    assert_eq!(doc.events[0].color, "#ff0000");
    assert_eq!(doc.events[0].time_label.as_deref(), Some("0.000"));
    assert_eq!(doc.events[1].time_label.as_deref(), Some("0.500"));

    // Canvas: width = hosts * spacing + left margin + last box width;
    // height = event layer top + last arrow + bottom margin.
    assert_eq!(doc.width, 2.0 * 60.0 + 20.0 + 40.0);
    assert_eq!(doc.time_top, 15.0 + 10.0);
    assert_eq!(doc.height, 25.0 + 3.0 + 10.0);

    // Registry sees the computed geometry too.
    assert_eq!(registry.hosts()[1].title_box.x, 80.0);
}

#[test]
fn lifeline_ends_at_each_hosts_own_last_event() {
    let (mut registry, event_types, settings) = fixture();
    // charlie's last event is at 1 s, alpha and bravo continue to 4 s.
    let mut events = vec![
        ev(0.0, 0, 2, "Ping"),
        ev(1.0, 2, 0, "Pong"),
        ev(4.0, 0, 1, "Ping"),
    ];
    sort_and_process(&mut events, &settings);
    let doc = layout_diagram(&mut registry, &events, &event_types, &settings);

    let time_top = 25.0;
    let box_height = 15.0;
    assert_eq!(doc.hosts[0].lifeline_end, time_top + 4.0 * 5.0 + box_height);
    assert_eq!(doc.hosts[1].lifeline_end, time_top + 4.0 * 5.0 + box_height);
    assert_eq!(doc.hosts[2].lifeline_end, time_top + 1.0 * 5.0 + box_height);
}

#[test]
fn close_events_get_their_time_label_suppressed() {
    let (mut registry, event_types, settings) = two_host_fixture();
    // 1 ms apart, below the 10 ms label gap.
    let mut events = vec![ev(0.0, 0, 1, "Ping"), ev(0.001, 1, 0, "Ping")];
    sort_and_process(&mut events, &settings);
    let doc = layout_diagram(&mut registry, &events, &event_types, &settings);

    assert!(doc.events[0].time_label.is_some());
    assert!(doc.events[1].time_label.is_none());
}

#[test]
fn label_jitter_is_bounded_and_deterministic() {
    let (mut registry, event_types, settings) = two_host_fixture();
    let mut events: Vec<_> = (0..50)
        .map(|i| ev(i as f64 * 0.1, (i % 2) as usize, ((i + 1) % 2) as usize, "Ping"))
        .collect();
    sort_and_process(&mut events, &settings);

    let doc = layout_diagram(&mut registry, &events, &event_types, &settings);
    let doc2 = layout_diagram(&mut registry, &events, &event_types, &settings);

    for (a, b) in doc.events.iter().zip(doc2.events.iter()) {
        assert_eq!(a.label_x, b.label_x);
        let midpoint = a.x + a.dx / 2.0;
        assert!((a.label_x - midpoint).abs() <= 0.25 * a.dx.abs() + 1e-9);
    }
}

#[test]
fn click_metadata_carries_capture_cross_references() {
    let (mut registry, event_types, settings) = two_host_fixture();
    let mut events = vec![ev(0.0, 0, 1, "Ping")];
    events[0].packet_id = Some(17);
    events[0].ack_packet_id = Some(23);
    events[0].set_ack_time(0.2, &settings.latency);
    sort_and_process(&mut events, &settings);

    let doc = layout_diagram(&mut registry, &events, &event_types, &settings);
    let arrow = &doc.events[0];
    assert_eq!(arrow.click.packet_id, Some(17));
    assert_eq!(arrow.click.ack_packet_id, Some(23));
    assert_eq!(arrow.click.ack_time, Some(0.2));
    assert_eq!(arrow.click.event_type, "Ping");
    assert_eq!(arrow.latency, Some(Latency::VerySlow));
}

#[test]
fn layout_document_serializes_to_json() {
    let (mut registry, event_types, settings) = two_host_fixture();
    let mut events = vec![ev(0.0, 0, 1, "Ping")];
    sort_and_process(&mut events, &settings);
    let doc = layout_diagram(&mut registry, &events, &event_types, &settings);

    let json = serde_json::to_value(&doc).expect("serialize");
    assert_eq!(json["hosts"][0]["host_id"], "a");
    assert_eq!(json["events"][0]["label"], "Ping");
    // Absent optionals stay out of the document.
    assert!(json["events"][0].get("latency").is_none());
}
