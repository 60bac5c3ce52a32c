//! Interface to the external statistical estimators.
//!
//! The decision tree treats the actual statistics as black boxes: given
//! vectors of values, censoring flags, times, and season groups, an
//! estimator returns a fit or fails. Implementations wrap whichever
//! statistics library a deployment uses; this crate ships none.
//!
//! All operations are synchronous, CPU-bound, and side-effect-free, so a
//! suite may be shared across threads processing independent datasets.

use crate::core::Season;
use crate::error::Result;

/// Trend-test output: rank correlation, significance, and slope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendFit {
    /// Kendall tau, in [-1, 1].
    pub tau: f64,
    /// Two-sided p-value, in [0, 1].
    pub p_value: f64,
    /// Trend slope in value units per time unit.
    pub slope: f64,
}

/// Group-difference test output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupTest {
    /// Test statistic (chi-squared-distributed for the supported tests).
    pub statistic: f64,
    /// p-value, in [0, 1].
    pub p_value: f64,
}

/// A fitted distribution that can be queried for quantiles.
pub trait QuantileModel {
    /// Quantile at probability `p` in [0, 1]. Monotone in `p`.
    fn quantile(&self, p: f64) -> f64;
}

/// The statistical collaborators consumed by the method dispatcher.
///
/// Censored variants take the recensored single-detection-limit data; the
/// uncensored seasonal/trend variants take normalized times (days since
/// the first sample).
pub trait EstimatorSuite {
    /// Seasonal rank-correlation trend test for censored data.
    fn censored_seasonal_trend(
        &self,
        times: &[f64],
        values: &[f64],
        censored: &[bool],
        seasons: &[Season],
    ) -> Result<TrendFit>;

    /// Mann-Kendall-equivalent trend test for censored data.
    fn censored_trend(
        &self,
        values: &[f64],
        censored: &[bool],
        times: &[f64],
    ) -> Result<TrendFit>;

    /// Seasonal Kendall trend test with slope estimate.
    fn uncensored_seasonal_trend(
        &self,
        values: &[f64],
        seasons: &[Season],
        normalized_times: &[f64],
    ) -> Result<TrendFit>;

    /// Mann-Kendall trend test with slope estimate.
    fn uncensored_trend(&self, values: &[f64], normalized_times: &[f64]) -> Result<TrendFit>;

    /// Peto-Peto-style group-difference test for censored data.
    fn censored_group_difference(
        &self,
        values: &[f64],
        censored: &[bool],
        groups: &[Season],
    ) -> Result<GroupTest>;

    /// Kruskal-Wallis rank test across groups.
    fn rank_group_difference(&self, values: &[f64], groups: &[Season]) -> Result<GroupTest>;

    /// Robust regression-on-order-statistics quantile fit for censored data.
    fn censored_quantile_fit(
        &self,
        values: &[f64],
        censored: &[bool],
    ) -> Result<Box<dyn QuantileModel>>;
}
