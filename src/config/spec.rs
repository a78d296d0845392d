//! Raw shape of the JSON configuration document.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSpec {
    pub hosts: Vec<HostSpec>,
    #[serde(rename = "eventTypes", default)]
    pub event_types: Vec<EventTypeSpec>,
    #[serde(default)]
    pub settings: SettingsSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostSpec {
    pub id: String,
    pub name: String,
    pub ip: String,
    pub host_type: String,
    pub sort_nudge: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub bg_color: Option<String>,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub font_color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventTypeSpec {
    #[serde(rename = "eventType")]
    pub event_type: String,
    pub color: String,
    #[serde(default)]
    pub font_size: Option<f64>,
}

/// Settings block as written in the file; every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsSpec {
    #[serde(default)]
    pub host_spacing: Option<f64>,
    #[serde(default)]
    pub left_margin: Option<f64>,
    #[serde(default)]
    pub bottom_margin: Option<f64>,
    #[serde(default)]
    pub time_scale: Option<f64>,
    #[serde(default)]
    pub min_label_gap: Option<f64>,
    #[serde(default)]
    pub max_time_gap: Option<f64>,
    #[serde(default)]
    pub latency_fast: Option<f64>,
    #[serde(default)]
    pub latency_slow: Option<f64>,
    #[serde(default)]
    pub latency_very_slow: Option<f64>,
    #[serde(default)]
    pub time_unit: Option<super::TimeUnit>,
}
