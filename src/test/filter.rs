use crate::filter::{display_filter, FilterStyle};
use crate::model::Host;

use super::util::fixture;

fn hosts_by_id<'a>(registry: &'a crate::model::HostRegistry, ids: &[&str]) -> Vec<&'a Host> {
    ids.iter()
        .map(|id| {
            let idx = registry.match_host(id).expect("known host");
            registry.get(idx)
        })
        .collect()
}

#[test]
fn expanded_filter_covers_all_ordered_host_pairs() {
    let (registry, _, _) = fixture();
    let hosts = hosts_by_id(&registry, &["alpha", "bravo"]);
    let events = vec!["StartCall".to_string()];

    let out = display_filter(&hosts, &events, FilterStyle::Expanded);
    assert!(out.contains("(ip.src==10.0.0.1 and ip.dst==10.0.0.2)"));
    assert!(out.contains("(ip.src==10.0.0.2 and ip.dst==10.0.0.1)"));
    assert!(out.contains("http ~ \"<eventType>StartCall</eventType>\""));
    assert!(out.contains("(http.response.code==200 and tcp.ack)"));
    assert!(out.contains('\n'));
}

#[test]
fn single_host_uses_the_source_form() {
    let (registry, _, _) = fixture();
    let hosts = hosts_by_id(&registry, &["charlie"]);
    let events = vec!["EndCall".to_string()];

    let out = display_filter(&hosts, &events, FilterStyle::Expanded);
    assert!(out.contains("ip.src==10.0.0.3"));
    assert!(!out.contains("ip.dst"));
}

#[test]
fn compact_mode_is_a_single_line() {
    let (registry, _, _) = fixture();
    let hosts = hosts_by_id(&registry, &["alpha", "bravo", "charlie"]);
    let events = vec!["StartCall".to_string(), "EndCall".to_string()];

    let out = display_filter(&hosts, &events, FilterStyle::Compact);
    assert!(!out.contains('\n'));
    assert!(out.contains("or (ip.src==10.0.0.3 and ip.dst==10.0.0.1)"));
    assert!(out.contains("or http ~ \"<eventType>EndCall</eventType>\""));
}

#[test]
fn event_clauses_are_or_joined_once_each() {
    let (registry, _, _) = fixture();
    let hosts = hosts_by_id(&registry, &["alpha", "bravo"]);
    let events = vec!["StartCall".to_string(), "EndCall".to_string()];

    let out = display_filter(&hosts, &events, FilterStyle::Expanded);
    assert_eq!(out.matches("<eventType>StartCall</eventType>").count(), 1);
    assert_eq!(out.matches("<eventType>EndCall</eventType>").count(), 1);
    assert_eq!(out.matches("http.response.code==200").count(), 1);
}

#[test]
fn no_hosts_yields_event_clauses_only() {
    let events = vec!["StartCall".to_string()];
    let out = display_filter(&[], &events, FilterStyle::Compact);
    assert!(out.contains("<eventType>StartCall</eventType>"));
    assert!(!out.contains("ip.src"));
}
