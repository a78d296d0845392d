//! Shared fixtures for the unit tests.

use crate::config::{self, ConfigSpec, Settings};
use crate::model::{Event, EventTypeTable, HostIdx, HostRegistry, Timestamp};

/// Three hosts (alpha/bravo/charlie) and two event types (Ping/Pong),
/// default settings.
pub fn fixture() -> (HostRegistry, EventTypeTable, Settings) {
    let spec: ConfigSpec = serde_json::from_value(serde_json::json!({
        "hosts": [
            {"id": "alpha", "name": "Alpha", "ip": "10.0.0.1", "host_type": "server", "sort_nudge": 0},
            {"id": "bravo", "name": "Bravo", "ip": "10.0.0.2", "host_type": "gateway", "sort_nudge": 1},
            {"id": "charlie", "name": "Charlie", "ip": "10.0.0.3", "host_type": "client", "sort_nudge": 2}
        ],
        "eventTypes": [
            {"eventType": "Ping", "color": "#ff0000"},
            {"eventType": "Pong", "color": "#00ff00"}
        ]
    }))
    .expect("fixture spec");
    config::from_spec(spec).expect("fixture config")
}

/// Event at `t_secs` seconds past the epoch.
pub fn ev(t_secs: f64, src: usize, dst: usize, ty: &str) -> Event {
    Event::new(
        Timestamp::from_secs_f64(t_secs),
        HostIdx(src),
        HostIdx(dst),
        ty,
    )
}
