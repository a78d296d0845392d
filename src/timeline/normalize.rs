//! Timeline normalization.

use tracing::{debug, trace};

use crate::config::{Settings, TimeUnit};
use crate::model::Event;

/// Normalize a timeline in place.
///
/// Stable-sorts by timestamp, links each event to its time-order
/// neighbors, derives elapsed seconds relative to the first event, and
/// compresses oversized gaps so one long pause does not stretch the whole
/// diagram. Absolute timestamps are never changed and events are never
/// reordered by compression, only their derived elapsed values shrink.
pub fn sort_and_process(events: &mut [Event], settings: &Settings) {
    if events.is_empty() {
        return;
    }

    // Vec::sort_by_key is stable, equal timestamps keep input order.
    events.sort_by_key(|e| e.time);

    let n = events.len();
    for (i, e) in events.iter_mut().enumerate() {
        e.prev = i.checked_sub(1);
        e.next = if i + 1 < n { Some(i + 1) } else { None };
    }

    let start = events[0].time;
    for e in events.iter_mut() {
        e.elapsed = e.time.secs_since(start);
    }

    // Gap compression only makes sense between at least two events. Each
    // oversized gap contributes its own excess, and the reduction carries
    // through to every later event.
    if n >= 2 {
        let mut reduction = 0.0;
        let mut prev_time = events[0].time;
        for e in events[1..].iter_mut() {
            let gap = e.time.secs_since(prev_time);
            if gap > settings.max_time_gap {
                let excess = gap - settings.max_time_gap;
                reduction += excess;
                trace!(gap, excess, total_reduction = reduction, "compressing time gap");
            }
            prev_time = e.time;
            e.elapsed -= reduction;
        }
        if reduction > 0.0 {
            debug!(
                seconds = reduction,
                "timeline compressed across oversized gaps"
            );
        }
    }

    if settings.time_unit == TimeUnit::Seconds {
        for e in events.iter_mut() {
            e.time_label = format!("{:.3}", e.elapsed);
        }
    }
}
