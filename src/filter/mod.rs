//! Capture display-filter strings.
//!
//! Pure text formatting: a boolean expression over source/destination
//! address pairs plus event-type payload matches, used to narrow a
//! capture to the traffic the diagram cares about.

use crate::model::Host;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStyle {
    /// Indented, one clause per line.
    Expanded,
    /// Whitespace-collapsed single line, ready to paste.
    Compact,
}

const ACK_CLAUSE: &str = "(http.response.code==200 and tcp.ack)";

/// Build a display filter matching traffic between `hosts` carrying any
/// of `event_types`, plus the acknowledgements to it.
pub fn display_filter(hosts: &[&Host], event_types: &[String], style: FilterStyle) -> String {
    let mut out = String::from("(\n");

    if !hosts.is_empty() {
        if hosts.len() > 1 {
            out.push_str("   (\n");
            let mut first = true;
            for a in hosts {
                for b in hosts {
                    if a.id == b.id {
                        continue;
                    }
                    out.push_str("      ");
                    out.push_str(if first { "   " } else { "or " });
                    first = false;
                    out.push_str(&format!("(ip.src=={} and ip.dst=={})\n", a.ip, b.ip));
                }
            }
            out.push_str("   )\n");
        } else {
            out.push_str(&format!("   ip.src=={}\n", hosts[0].ip));
        }
        if !event_types.is_empty() {
            out.push_str("   and ");
        }
    }

    if !event_types.is_empty() {
        out.push_str("(\n");
        for (i, name) in event_types.iter().enumerate() {
            out.push_str("      ");
            out.push_str(if i > 0 { "or " } else { "   " });
            out.push_str(&format!("http ~ \"<eventType>{name}</eventType>\"\n"));
        }
        out.push_str(&format!("      or {ACK_CLAUSE}\n"));
        out.push_str("   )\n");
    }

    out.push(')');

    match style {
        FilterStyle::Expanded => out,
        FilterStyle::Compact => out.split_whitespace().collect::<Vec<_>>().join(" "),
    }
}
