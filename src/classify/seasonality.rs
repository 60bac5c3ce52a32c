//! Seasonality classification.
//!
//! Decides whether season is a statistically meaningful grouping before the
//! dispatcher chooses between seasonal and plain trend tests. The actual
//! group-difference tests are external estimators; this module only guards
//! their preconditions and applies the significance threshold.

use crate::config::AnalysisConfig;
use crate::core::{Dataset, Season};
use crate::estimator::EstimatorSuite;
use std::collections::HashSet;

/// Seasonality decision plus the underlying test output for audit.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalityDecision {
    /// Whether the dataset shows meaningful seasonal structure.
    pub is_seasonal: bool,
    /// Group-difference test statistic, when a test ran.
    pub statistic: Option<f64>,
    /// Group-difference p-value, when a test ran.
    pub p_value: Option<f64>,
    /// Failure detail when the external test failed.
    pub error: Option<String>,
}

impl SeasonalityDecision {
    fn not_seasonal() -> Self {
        Self {
            is_seasonal: false,
            statistic: None,
            p_value: None,
            error: None,
        }
    }
}

/// Classify seasonality for one dataset.
///
/// Observations without a season label are excluded from the group count
/// and from the test inputs. With fewer than `min_seasons` distinct labels
/// the classifier short-circuits to "not seasonal" without invoking the
/// external test. An external-test failure also resolves to "not seasonal",
/// with the failure retained for audit.
pub fn classify_seasonality<E: EstimatorSuite + ?Sized>(
    dataset: &Dataset,
    censored: bool,
    estimators: &E,
    config: &AnalysisConfig,
) -> SeasonalityDecision {
    let mut values = Vec::new();
    let mut flags = Vec::new();
    let mut seasons = Vec::new();
    for obs in dataset.observations() {
        if let Some(season) = obs.season {
            values.push(obs.value);
            flags.push(obs.censored);
            seasons.push(season);
        }
    }

    let distinct: HashSet<Season> = seasons.iter().copied().collect();
    if distinct.len() < config.min_seasons {
        return SeasonalityDecision::not_seasonal();
    }

    let outcome = if censored {
        estimators.censored_group_difference(&values, &flags, &seasons)
    } else {
        estimators.rank_group_difference(&values, &seasons)
    };

    match outcome {
        Ok(test) => SeasonalityDecision {
            is_seasonal: test.p_value < config.alpha,
            statistic: Some(test.statistic),
            p_value: Some(test.p_value),
            error: None,
        },
        // Untestable counts as non-seasonal.
        Err(err) => SeasonalityDecision {
            is_seasonal: false,
            statistic: None,
            p_value: None,
            error: Some(err.to_string()),
        },
    }
}
