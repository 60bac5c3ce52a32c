//! The decision-tree pipeline over one dataset.
//!
//! Classification, detection-limit reconciliation, seasonality testing,
//! method dispatch, and the censored summary, run in order for a single
//! parameter/station series. Stateless per call; independent datasets may
//! be processed in parallel with no coordination.

use crate::censor;
use crate::classify::{classify_seasonality, evaluate_suitability};
use crate::config::AnalysisConfig;
use crate::core::{CensoredSummary, ClassificationResult, Dataset, MethodResult, TrendMethod};
use crate::dispatch;
use crate::estimator::EstimatorSuite;

/// Everything the decision tree produces for one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetReport {
    /// Derived facts the dispatch routed on.
    pub classification: ClassificationResult,
    /// Outcome of the selected trend test.
    pub trend: MethodResult,
    /// Censored summary statistics; present for censored datasets only.
    pub summary: Option<CensoredSummary>,
}

/// Run the full decision tree for one parameter/station series.
///
/// The suitability gate annotates but never skips: all steps run either
/// way, and downstream consumers decide what to do with a failed gate.
/// Estimator failures stay contained in the individual result records.
pub fn analyze_dataset<E: EstimatorSuite + ?Sized>(
    dataset: &Dataset,
    estimators: &E,
    config: &AnalysisConfig,
) -> DatasetReport {
    let suitability = evaluate_suitability(dataset, config);
    let censored = dataset.any_censored();
    let multiple_limits = dataset.has_multiple_detection_limits();

    // Censored estimators need one detection limit; the multiplicity check
    // gates the recensoring step.
    let recensored = if censored && multiple_limits {
        censor::recensor(dataset).ok()
    } else {
        None
    };
    let working = recensored.as_ref().map_or(dataset, |r| &r.dataset);

    let seasonality = classify_seasonality(working, censored, estimators, config);
    let method = TrendMethod::select(censored, seasonality.is_seasonal);
    let trend = dispatch::run_trend_test(working, method, estimators);
    let summary = if censored {
        Some(dispatch::censored_summary(working, estimators, config))
    } else {
        None
    };

    DatasetReport {
        classification: ClassificationResult {
            sample_size: dataset.len(),
            censoring_pct: dataset.censoring_pct(),
            has_multiple_detection_limits: multiple_limits,
            is_seasonal: Some(seasonality.is_seasonal),
            suitability,
        },
        trend,
        summary,
    }
}
