//! Method dispatch.
//!
//! Routes a classified dataset to exactly one of the four trend-test
//! estimators and normalizes the outcome into a [`MethodResult`]. Every
//! estimator failure is caught here and surfaced as `success = false`;
//! nothing propagates outward, so a batch driver iterating hundreds of
//! parameter/station series never aborts on one bad fit.

use crate::config::AnalysisConfig;
use crate::core::{CensoredSummary, Dataset, MethodResult, Season, TrendMethod};
use crate::error::{Result, TrendError};
use crate::estimator::EstimatorSuite;

/// Run the selected trend test against the external estimator suite.
pub fn run_trend_test<E: EstimatorSuite + ?Sized>(
    dataset: &Dataset,
    method: TrendMethod,
    estimators: &E,
) -> MethodResult {
    let values = dataset.values();
    let flags = dataset.censor_flags();

    let outcome = match method {
        TrendMethod::Censeaken => seasons_required(dataset).and_then(|seasons| {
            estimators.censored_seasonal_trend(
                &dataset.times_epoch_days(),
                &values,
                &flags,
                &seasons,
            )
        }),
        TrendMethod::Cenken => {
            estimators.censored_trend(&values, &flags, &dataset.times_epoch_days())
        }
        TrendMethod::SeasonalKendall => seasons_required(dataset).and_then(|seasons| {
            estimators.uncensored_seasonal_trend(&values, &seasons, &dataset.normalized_times())
        }),
        TrendMethod::MannKendall => {
            estimators.uncensored_trend(&values, &dataset.normalized_times())
        }
    };

    match outcome {
        Ok(fit) => MethodResult::from_fit(method, fit),
        Err(err) => MethodResult::from_error(method, &err),
    }
}

/// Censored summary statistics, reported regardless of trend-test outcome.
///
/// Primary path: robust regression-on-order-statistics fit evaluated at the
/// configured quantiles. Fallback on failure: empirical quantiles over the
/// detected subset only, with `success = false` signalling the fallback.
/// When nothing was detected the recorded values (the detection limits)
/// stand in, so the summary still returns numbers.
pub fn censored_summary<E: EstimatorSuite + ?Sized>(
    dataset: &Dataset,
    estimators: &E,
    config: &AnalysisConfig,
) -> CensoredSummary {
    let values = dataset.values();
    let flags = dataset.censor_flags();
    let [lo, mid, hi] = config.quantiles;

    match estimators.censored_quantile_fit(&values, &flags) {
        Ok(model) => CensoredSummary {
            lower: model.quantile(lo),
            median: model.quantile(mid),
            upper: model.quantile(hi),
            success: true,
            error: None,
        },
        Err(err) => {
            let detected: Vec<f64> = values
                .iter()
                .zip(flags.iter())
                .filter(|(_, censored)| !**censored)
                .map(|(v, _)| *v)
                .collect();
            let pool = if detected.is_empty() { values } else { detected };
            CensoredSummary {
                lower: empirical_quantile(&pool, lo),
                median: empirical_quantile(&pool, mid),
                upper: empirical_quantile(&pool, hi),
                success: false,
                error: Some(err.to_string()),
            }
        }
    }
}

fn seasons_required(dataset: &Dataset) -> Result<Vec<Season>> {
    dataset
        .observations()
        .iter()
        .map(|o| {
            o.season.ok_or_else(|| {
                TrendError::InvalidParameter(
                    "seasonal test requires a season label on every observation".to_string(),
                )
            })
        })
        .collect()
}

/// Linearly interpolated empirical quantile. Monotone in `p`.
fn empirical_quantile(values: &[f64], p: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let h = (n - 1) as f64 * p.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}
