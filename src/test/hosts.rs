use crate::model::HostIdx;

use super::util::{ev, fixture};

#[test]
fn match_host_precedence_id_then_name_then_ip() {
    let (registry, _, _) = fixture();
    assert_eq!(registry.match_host("bravo"), Some(HostIdx(1)));
    assert_eq!(registry.match_host("Charlie"), Some(HostIdx(2)));
    assert_eq!(registry.match_host("10.0.0.1"), Some(HostIdx(0)));
    assert_eq!(registry.match_host("ALPHA"), Some(HostIdx(0)));
    assert_eq!(registry.match_host("nobody"), None);
}

#[test]
fn match_hosts_skips_unmatched_queries() {
    let (registry, _, _) = fixture();
    let matched = registry.match_hosts(&[
        "bravo".to_string(),
        "nobody".to_string(),
        "10.0.0.3".to_string(),
    ]);
    assert_eq!(matched, vec![HostIdx(1), HostIdx(2)]);
}

#[test]
fn retain_participants_keeps_order_and_remaps_indices() {
    let (mut registry, _, _) = fixture();
    // bravo (index 1) takes part in nothing.
    let mut events = vec![ev(0.0, 0, 2, "Ping"), ev(1.0, 2, 0, "Pong")];
    registry.retain_participants(&mut events);

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.hosts()[0].id, "alpha");
    assert_eq!(registry.hosts()[1].id, "charlie");

    assert_eq!(registry.get(events[0].src).id, "alpha");
    assert_eq!(registry.get(events[0].dst).id, "charlie");
    assert_eq!(registry.get(events[1].src).id, "charlie");
    assert_eq!(registry.get(events[1].dst).id, "alpha");
}

#[test]
fn retain_participants_with_no_events_drops_everything() {
    let (mut registry, _, _) = fixture();
    let mut events = Vec::new();
    registry.retain_participants(&mut events);
    assert!(registry.is_empty());
}

#[test]
fn registry_orders_hosts_by_sort_nudge() {
    use crate::config::{self, ConfigSpec};

    let spec: ConfigSpec = serde_json::from_value(serde_json::json!({
        "hosts": [
            {"id": "z", "name": "Z", "ip": "10.0.0.9", "host_type": "client", "sort_nudge": 5},
            {"id": "a", "name": "A", "ip": "10.0.0.8", "host_type": "client", "sort_nudge": -1},
            {"id": "m", "name": "M", "ip": "10.0.0.7", "host_type": "client", "sort_nudge": 5}
        ]
    }))
    .expect("spec");
    let (registry, _, _) = config::from_spec(spec).expect("config");

    let ids: Vec<&str> = registry.hosts().iter().map(|h| h.id.as_str()).collect();
    // Stable: z stays ahead of m among equal nudges.
    assert_eq!(ids, vec!["a", "z", "m"]);
}
