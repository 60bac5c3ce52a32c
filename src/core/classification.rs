//! Derived facts about a dataset.

use serde::{Deserialize, Serialize};

/// Outcome of one suitability check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuitabilityCheck {
    /// Whether the check passed.
    pub passed: bool,
    /// Human-readable explanation, populated on pass and fail alike.
    pub reason: String,
}

/// Sample-size and censoring-rate gate results.
///
/// The gate annotates; it never aborts. Downstream consumers decide
/// whether to skip or flag analyses that fail it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suitability {
    pub sample_size: SuitabilityCheck,
    pub censoring: SuitabilityCheck,
}

impl Suitability {
    /// Whether both checks passed.
    pub fn passed(&self) -> bool {
        self.sample_size.passed && self.censoring.passed
    }
}

/// Classification of one dataset, computed fresh per series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Number of observations.
    pub sample_size: usize,
    /// Share of non-detects, in percent (0 to 100).
    pub censoring_pct: f64,
    /// Whether more than one distinct detection limit is present.
    pub has_multiple_detection_limits: bool,
    /// Seasonality decision; `None` when untested.
    pub is_seasonal: Option<bool>,
    /// Gate outcome.
    pub suitability: Suitability,
}
