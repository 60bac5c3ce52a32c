//! Timestamp parsing and season classification.

use crate::core::Season;
use chrono::{Datelike, NaiveDateTime};

/// Fixed textual timestamp format of the field data.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%y %H:%M";

/// Temporal facts derived from one timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemporalInfo {
    pub year: i32,
    /// Calendar month, 1 to 12.
    pub month: u32,
    pub season: Season,
}

/// Parse a `MM/DD/YY HH:MM` timestamp. `None` on failure.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).ok()
}

/// Derive year, month, and hydrological season from a timestamp.
pub fn classify(timestamp: NaiveDateTime) -> Option<TemporalInfo> {
    let month = timestamp.month();
    let season = Season::from_month(month)?;
    Some(TemporalInfo {
        year: timestamp.year(),
        month,
        season,
    })
}

/// Parse and classify in one step.
///
/// A timestamp that fails to parse yields `None`, which callers must treat
/// as "temporal info unavailable", never as a fourth season.
pub fn classify_timestamp(raw: &str) -> Option<TemporalInfo> {
    parse_timestamp(raw).and_then(classify)
}
