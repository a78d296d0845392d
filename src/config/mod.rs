//! Configuration loading.
//!
//! The configuration is one JSON document with three blocks: `hosts`,
//! `eventTypes` and `settings`. Any settings field may be omitted; the
//! defaults are documented on [`Settings`]. Configuration problems are
//! fatal at load time, no diagram is produced from a bad config.

mod settings;
mod spec;

pub use settings::{Settings, TimeUnit};
pub use spec::{ConfigSpec, EventTypeSpec, HostSpec, SettingsSpec};

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::model::{EventType, EventTypeTable, Host, HostKind, HostRegistry, TitleBox};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("host {host:?} has unknown category {label:?}")]
    UnknownHostKind { host: String, label: String },
    #[error("duplicate host id {0:?}")]
    DuplicateHost(String),
    #[error("setting {name} must be positive, got {value}")]
    NonPositiveSetting { name: &'static str, value: f64 },
    #[error("latency thresholds must be ordered fast < slow < very_slow")]
    UnorderedThresholds,
}

/// Load and validate a configuration file.
pub fn load_config(path: &Path) -> Result<(HostRegistry, EventTypeTable, Settings), ConfigError> {
    let raw = fs::read_to_string(path)?;
    let spec: ConfigSpec = serde_json::from_str(&raw)?;
    from_spec(spec)
}

/// Build the model from an already-parsed document.
pub fn from_spec(spec: ConfigSpec) -> Result<(HostRegistry, EventTypeTable, Settings), ConfigError> {
    let mut hosts = Vec::with_capacity(spec.hosts.len());
    for h in spec.hosts {
        if hosts.iter().any(|other: &Host| other.id == h.id) {
            return Err(ConfigError::DuplicateHost(h.id));
        }
        let kind = HostKind::parse(&h.host_type).ok_or_else(|| ConfigError::UnknownHostKind {
            host: h.id.clone(),
            label: h.host_type.clone(),
        })?;

        let mut title_box = TitleBox::for_kind(kind);
        if let Some(w) = h.width {
            title_box.width = w;
        }
        if let Some(hh) = h.height {
            title_box.height = hh;
        }
        if let Some(c) = h.bg_color {
            title_box.bg_color = c;
        }
        if let Some(s) = h.font_size {
            title_box.font_size = s;
        }
        if let Some(c) = h.font_color {
            title_box.font_color = c;
        }

        hosts.push(Host {
            id: h.id,
            name: h.name,
            ip: h.ip,
            kind,
            sort_nudge: h.sort_nudge,
            description: h.description,
            title_box,
        });
    }

    let mut event_types = EventTypeTable::new();
    for e in spec.event_types {
        let mut et = EventType::new(e.event_type.clone(), e.color);
        if let Some(s) = e.font_size {
            et.font_size = s;
        }
        event_types.insert(e.event_type, et);
    }

    let settings = Settings::from_spec(spec.settings)?;
    debug!(
        hosts = hosts.len(),
        event_types = event_types.len(),
        "configuration loaded"
    );

    Ok((HostRegistry::new(hosts), event_types, settings))
}
