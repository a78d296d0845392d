//! Resolved settings with defaults.

use serde::{Deserialize, Serialize};

use super::spec::SettingsSpec;
use super::ConfigError;
use crate::model::LatencyThresholds;

/// Unit used for the per-event time labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    /// Seconds since the first event, millisecond precision.
    #[default]
    Seconds,
    /// Keep whatever label the source assigned (wall clock, raw offsets).
    Clock,
}

/// Process-wide layout and classification settings, read-only once built.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Horizontal distance between host lanes.
    pub host_spacing: f64,
    /// Space left of the first lane.
    pub left_margin: f64,
    /// Space below the last event arrow.
    pub bottom_margin: f64,
    /// Vertical units per elapsed second.
    pub time_scale: f64,
    /// Gap to the previous event (seconds) below which an event's time
    /// label is suppressed.
    pub min_label_gap: f64,
    /// Largest tolerated gap between consecutive events (seconds); larger
    /// gaps are compressed down to this.
    pub max_time_gap: f64,
    pub latency: LatencyThresholds,
    pub time_unit: TimeUnit,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            host_spacing: 60.0,
            left_margin: 20.0,
            bottom_margin: 10.0,
            time_scale: 5.0,
            min_label_gap: 0.01,
            max_time_gap: 2.0,
            latency: LatencyThresholds::default(),
            time_unit: TimeUnit::Seconds,
        }
    }
}

impl Settings {
    /// Layer explicit overrides on top of the defaults, then validate.
    pub fn from_spec(spec: SettingsSpec) -> Result<Settings, ConfigError> {
        let mut s = Settings::default();
        if let Some(v) = spec.host_spacing {
            s.host_spacing = v;
        }
        if let Some(v) = spec.left_margin {
            s.left_margin = v;
        }
        if let Some(v) = spec.bottom_margin {
            s.bottom_margin = v;
        }
        if let Some(v) = spec.time_scale {
            s.time_scale = v;
        }
        if let Some(v) = spec.min_label_gap {
            s.min_label_gap = v;
        }
        if let Some(v) = spec.max_time_gap {
            s.max_time_gap = v;
        }
        if let Some(v) = spec.latency_fast {
            s.latency.fast = v;
        }
        if let Some(v) = spec.latency_slow {
            s.latency.slow = v;
        }
        if let Some(v) = spec.latency_very_slow {
            s.latency.very_slow = v;
        }
        if let Some(v) = spec.time_unit {
            s.time_unit = v;
        }

        for (name, value) in [
            ("host_spacing", s.host_spacing),
            ("time_scale", s.time_scale),
            ("max_time_gap", s.max_time_gap),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveSetting { name, value });
            }
        }
        if !(s.latency.fast < s.latency.slow && s.latency.slow < s.latency.very_slow) {
            return Err(ConfigError::UnorderedThresholds);
        }
        Ok(s)
    }
}
