//! Wall-clock timestamps.
//!
//! Event records carry timestamps in the `YYYY-mm-dd HH:MM:SS.ffffff`
//! form; internally a timestamp is microseconds since the Unix epoch so
//! sorting and gap arithmetic stay integral.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Wall-clock time (microseconds since the Unix epoch).
///
/// Serializes as a plain integer, which is what capture dumps carry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Format accepted on input; the fractional part may be shorter than
    /// six digits.
    const PARSE_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S%.f";
    /// Format emitted on output (always six fractional digits).
    const WRITE_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S%.6f";

    pub fn from_micros(us: i64) -> Timestamp {
        Timestamp(us)
    }

    pub fn from_secs_f64(secs: f64) -> Timestamp {
        Timestamp((secs * 1_000_000.0).round() as i64)
    }

    /// Parse a record timestamp.
    pub fn parse(s: &str) -> Result<Timestamp, chrono::ParseError> {
        let dt = NaiveDateTime::parse_from_str(s.trim(), Self::PARSE_FORMAT)?;
        Ok(Timestamp(dt.and_utc().timestamp_micros()))
    }

    /// Render back to the record format.
    pub fn render(&self) -> String {
        DateTime::from_timestamp_micros(self.0)
            .map(|dt| dt.naive_utc().format(Self::WRITE_FORMAT).to_string())
            .unwrap_or_default()
    }

    /// Seconds elapsed since `earlier` (negative if `self` is older).
    pub fn secs_since(&self, earlier: Timestamp) -> f64 {
        (self.0 - earlier.0) as f64 / 1_000_000.0
    }
}
