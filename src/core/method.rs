//! Trend-test method selection and the uniform result record.

use crate::error::TrendError;
use crate::estimator::TrendFit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four trend-test variants of the decision tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendMethod {
    /// Seasonal rank-correlation test for censored data.
    Censeaken,
    /// Mann-Kendall-equivalent test for censored data.
    Cenken,
    /// Seasonal Kendall trend test with slope estimate.
    SeasonalKendall,
    /// Mann-Kendall trend test with slope estimate.
    MannKendall,
}

impl TrendMethod {
    /// The decision table: {censored, seasonal} -> method.
    pub fn select(censored: bool, seasonal: bool) -> TrendMethod {
        match (censored, seasonal) {
            (true, true) => TrendMethod::Censeaken,
            (true, false) => TrendMethod::Cenken,
            (false, true) => TrendMethod::SeasonalKendall,
            (false, false) => TrendMethod::MannKendall,
        }
    }

    /// Stable method tag used by downstream reporting.
    pub fn tag(&self) -> &'static str {
        match self {
            TrendMethod::Censeaken => "censeaken",
            TrendMethod::Cenken => "cenken",
            TrendMethod::SeasonalKendall => "seasonal_kendall",
            TrendMethod::MannKendall => "mann_kendall",
        }
    }
}

impl fmt::Display for TrendMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Output of a single trend test, identical in shape across all four
/// dispatch branches. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodResult {
    /// Which test ran.
    pub method: TrendMethod,
    /// Rank-correlation coefficient, in [-1, 1].
    pub tau: Option<f64>,
    /// Significance of the trend, in [0, 1].
    pub p_value: Option<f64>,
    /// Trend slope in value units per day.
    pub slope: Option<f64>,
    /// Raw test statistic, when the estimator reports one.
    pub statistic: Option<f64>,
    /// Whether the estimator completed.
    pub success: bool,
    /// Failure detail, present iff `success` is false.
    pub error: Option<String>,
}

impl MethodResult {
    /// Wrap a completed estimator fit.
    pub fn from_fit(method: TrendMethod, fit: TrendFit) -> Self {
        Self {
            method,
            tau: Some(fit.tau),
            p_value: Some(fit.p_value),
            slope: Some(fit.slope),
            statistic: None,
            success: true,
            error: None,
        }
    }

    /// Capture a contained estimator failure.
    pub fn from_error(method: TrendMethod, error: &TrendError) -> Self {
        Self {
            method,
            tau: None,
            p_value: None,
            slope: None,
            statistic: None,
            success: false,
            error: Some(error.to_string()),
        }
    }
}

/// Censored summary statistics at the configured quantiles
/// (default 5th, 50th, and 95th percentiles).
///
/// `success` is false when the robust fit failed and the empirical
/// fallback supplied the quantiles instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CensoredSummary {
    /// Lower quantile (default 5th percentile).
    pub lower: f64,
    /// Median.
    pub median: f64,
    /// Upper quantile (default 95th percentile).
    pub upper: f64,
    /// Whether the robust quantile fit succeeded.
    pub success: bool,
    /// Failure detail when the fallback path was used.
    pub error: Option<String>,
}
