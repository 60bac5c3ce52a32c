//! Observation and Dataset types for water-quality series.

use crate::error::{Result, TrendError};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Hydrological season of an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// December through February.
    #[serde(rename = "Under ice")]
    UnderIce,
    /// March through May.
    #[serde(rename = "High flow")]
    HighFlow,
    /// June through November.
    #[serde(rename = "Open water")]
    OpenWater,
}

impl Season {
    /// Map a calendar month (1 to 12) onto the hydrological season.
    ///
    /// Returns `None` for months outside 1..=12.
    pub fn from_month(month: u32) -> Option<Season> {
        match month {
            12 | 1 | 2 => Some(Season::UnderIce),
            3..=5 => Some(Season::HighFlow),
            6..=11 => Some(Season::OpenWater),
            _ => None,
        }
    }

    /// Human-readable season label.
    pub fn label(&self) -> &'static str {
        match self {
            Season::UnderIce => "Under ice",
            Season::HighFlow => "High flow",
            Season::OpenWater => "Open water",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One concentration measurement.
///
/// For a non-detect the recorded value IS the detection limit; for a
/// detected value the detection limit is absent. The constructors uphold
/// this invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Recorded concentration.
    pub value: f64,
    /// Whether the value is left-censored (below the detection limit).
    pub censored: bool,
    /// Detection limit, present iff censored.
    pub detection_limit: Option<f64>,
    /// Sampling timestamp.
    pub timestamp: NaiveDateTime,
    /// Hydrological season, when temporal info is available.
    pub season: Option<Season>,
}

impl Observation {
    /// A detected measurement.
    pub fn detect(value: f64, timestamp: NaiveDateTime) -> Self {
        Self {
            value,
            censored: false,
            detection_limit: None,
            timestamp,
            season: None,
        }
    }

    /// A non-detect, recorded at its detection limit.
    pub fn nondetect(limit: f64, timestamp: NaiveDateTime) -> Self {
        Self {
            value: limit,
            censored: true,
            detection_limit: Some(limit),
            timestamp,
            season: None,
        }
    }

    /// Attach a season label.
    pub fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    /// Timestamp as fractional days since the Unix epoch.
    pub fn epoch_days(&self) -> f64 {
        self.timestamp.and_utc().timestamp() as f64 / SECONDS_PER_DAY
    }
}

/// An ordered series of observations for one parameter at one station.
///
/// Non-empty by construction. Chronological order is recoverable from the
/// timestamps; positional order carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    parameter: String,
    station: String,
    observations: Vec<Observation>,
}

impl Dataset {
    /// Create a dataset. Fails on an empty observation list.
    pub fn new(
        parameter: impl Into<String>,
        station: impl Into<String>,
        observations: Vec<Observation>,
    ) -> Result<Self> {
        if observations.is_empty() {
            return Err(TrendError::EmptyData);
        }
        Ok(Self {
            parameter: parameter.into(),
            station: station.into(),
            observations,
        })
    }

    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    pub fn station(&self) -> &str {
        &self.station
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Recorded values, in input order.
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }

    /// Censoring flags, in input order.
    pub fn censor_flags(&self) -> Vec<bool> {
        self.observations.iter().map(|o| o.censored).collect()
    }

    /// Season labels, in input order.
    pub fn seasons(&self) -> Vec<Option<Season>> {
        self.observations.iter().map(|o| o.season).collect()
    }

    /// Timestamps as fractional days since the Unix epoch.
    pub fn times_epoch_days(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.epoch_days()).collect()
    }

    /// Times with the dataset minimum subtracted.
    ///
    /// Removes the arbitrary epoch offset so slope estimates carry a stable
    /// small-magnitude unit (days since the first sample).
    pub fn normalized_times(&self) -> Vec<f64> {
        let times = self.times_epoch_days();
        let min = times.iter().copied().fold(f64::INFINITY, f64::min);
        times.iter().map(|t| t - min).collect()
    }

    /// Whether any observation is a non-detect.
    pub fn any_censored(&self) -> bool {
        self.observations.iter().any(|o| o.censored)
    }

    /// Share of non-detects, in percent of all observations.
    pub fn censoring_pct(&self) -> f64 {
        let censored = self.observations.iter().filter(|o| o.censored).count();
        100.0 * censored as f64 / self.observations.len() as f64
    }

    /// Distinct detection limits, ascending.
    pub fn distinct_detection_limits(&self) -> Vec<f64> {
        let mut limits: Vec<f64> = self
            .observations
            .iter()
            .filter_map(|o| o.detection_limit)
            .collect();
        limits.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        limits.dedup();
        limits
    }

    /// Whether more than one distinct detection limit is present.
    pub fn has_multiple_detection_limits(&self) -> bool {
        self.distinct_detection_limits().len() > 1
    }
}
