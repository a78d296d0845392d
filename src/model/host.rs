//! Hosts and the host registry.
//!
//! A host is one vertical lifeline on the diagram. Hosts are built once
//! from configuration, ordered by their sort nudge, and only their title
//! box is touched again (by the layout pass, to fill in coordinates).

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::event::Event;
use super::id::HostIdx;

/// Endpoint role of a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostKind {
    Server,
    Gateway,
    Client,
    Monitor,
}

impl HostKind {
    /// Map a configuration label to a kind. Unrecognized labels are a
    /// configuration error, handled by the caller.
    pub fn parse(label: &str) -> Option<HostKind> {
        match label.trim().to_ascii_lowercase().as_str() {
            "server" => Some(HostKind::Server),
            "gateway" => Some(HostKind::Gateway),
            "client" => Some(HostKind::Client),
            "monitor" => Some(HostKind::Monitor),
            _ => None,
        }
    }

    /// Default title-box background per role.
    pub fn default_bg_color(&self) -> &'static str {
        match self {
            HostKind::Server => "#204a87",
            HostKind::Gateway => "#4e9a06",
            HostKind::Client => "#5c3566",
            HostKind::Monitor => "#555753",
        }
    }
}

/// Title box and lifeline geometry of a host.
///
/// `x`, `y` and `lifeline_end` are filled in by the layout pass; the rest
/// come from configuration with these defaults.
#[derive(Debug, Clone, Serialize)]
pub struct TitleBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub bg_color: String,
    pub font_size: f64,
    pub font_color: String,
    /// Absolute y where the lifeline stops (just past the host's last
    /// event). Zero until layout runs.
    pub lifeline_end: f64,
}

impl TitleBox {
    pub const DEFAULT_WIDTH: f64 = 40.0;
    pub const DEFAULT_HEIGHT: f64 = 15.0;
    pub const DEFAULT_FONT_SIZE: f64 = 4.2;
    pub const DEFAULT_FONT_COLOR: &'static str = "#ffffff";

    pub fn for_kind(kind: HostKind) -> TitleBox {
        TitleBox {
            x: 0.0,
            y: 0.0,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            bg_color: kind.default_bg_color().to_string(),
            font_size: Self::DEFAULT_FONT_SIZE,
            font_color: Self::DEFAULT_FONT_COLOR.to_string(),
            lifeline_end: 0.0,
        }
    }

    /// Horizontal center of the box, i.e. the lifeline lane.
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// A named network endpoint.
#[derive(Debug, Clone)]
pub struct Host {
    pub id: String,
    pub name: String,
    pub ip: String,
    pub kind: HostKind,
    pub sort_nudge: i32,
    pub description: Option<String>,
    pub title_box: TitleBox,
}

/// Ordered set of hosts participating in a diagram.
///
/// Order is ascending by sort nudge; ties keep their input order. The
/// registry never grows after construction, it may only shrink via
/// [`HostRegistry::retain_participants`].
#[derive(Debug, Default)]
pub struct HostRegistry {
    hosts: Vec<Host>,
}

impl HostRegistry {
    /// Build a registry from already-constructed hosts, sorting by nudge.
    pub fn new(mut hosts: Vec<Host>) -> HostRegistry {
        hosts.sort_by_key(|h| h.sort_nudge);
        HostRegistry { hosts }
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn get(&self, idx: HostIdx) -> &Host {
        &self.hosts[idx.0]
    }

    pub fn hosts(&self) -> &[Host] {
        &self.hosts
    }

    pub fn hosts_mut(&mut self) -> &mut [Host] {
        &mut self.hosts
    }

    /// Case-insensitive lookup by id, then display name, then address, in
    /// that precedence order. An unmatched query is not an error here;
    /// callers that require a match decide what absence means.
    pub fn match_host(&self, query: &str) -> Option<HostIdx> {
        let q = query.trim().to_ascii_lowercase();
        let find = |field: fn(&Host) -> &str| {
            self.hosts
                .iter()
                .position(|h| field(h).to_ascii_lowercase() == q)
        };
        find(|h| &h.id)
            .or_else(|| find(|h| &h.name))
            .or_else(|| find(|h| &h.ip))
            .map(HostIdx)
    }

    /// Resolve a user-supplied list of names/addresses, skipping entries
    /// that match nothing.
    pub fn match_hosts(&self, queries: &[String]) -> Vec<HostIdx> {
        queries
            .iter()
            .filter_map(|q| {
                let found = self.match_host(q);
                if found.is_none() {
                    debug!(query = %q, "no host matched query");
                }
                found
            })
            .collect()
    }

    /// Drop hosts that appear in no event, preserving relative order, and
    /// remap the events' host indices onto the shrunken registry.
    ///
    /// The kept set is computed up front, never by removing elements from
    /// a list that is being walked.
    pub fn retain_participants(&mut self, events: &mut [Event]) {
        let mut new_idx: Vec<Option<usize>> = vec![None; self.hosts.len()];
        let mut kept = 0usize;
        for (i, slot) in new_idx.iter_mut().enumerate() {
            let used = events
                .iter()
                .any(|e| e.src == HostIdx(i) || e.dst == HostIdx(i));
            if used {
                *slot = Some(kept);
                kept += 1;
            }
        }

        if kept == self.hosts.len() {
            return;
        }
        debug!(
            before = self.hosts.len(),
            after = kept,
            "dropping hosts with no events"
        );

        let mut i = 0;
        self.hosts.retain(|_| {
            let keep = new_idx[i].is_some();
            i += 1;
            keep
        });
        for e in events.iter_mut() {
            e.src = HostIdx(new_idx[e.src.0].expect("src host kept"));
            e.dst = HostIdx(new_idx[e.dst.0].expect("dst host kept"));
        }
    }
}
