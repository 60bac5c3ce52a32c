//! Sample-size and censoring-rate suitability gate.

use crate::config::AnalysisConfig;
use crate::core::{Dataset, Suitability, SuitabilityCheck};

/// Run both suitability checks against the configured thresholds.
///
/// Boundaries are inclusive: a dataset with exactly `min_sample_size`
/// observations passes, as does one at exactly `max_censoring_pct`.
pub fn evaluate_suitability(dataset: &Dataset, config: &AnalysisConfig) -> Suitability {
    let n = dataset.len();
    let sample_size = if n >= config.min_sample_size {
        SuitabilityCheck {
            passed: true,
            reason: format!("sample size {} meets minimum {}", n, config.min_sample_size),
        }
    } else {
        SuitabilityCheck {
            passed: false,
            reason: format!("sample size {} below minimum {}", n, config.min_sample_size),
        }
    };

    let pct = dataset.censoring_pct();
    let censoring = if pct <= config.max_censoring_pct {
        SuitabilityCheck {
            passed: true,
            reason: format!(
                "censoring {:.1}% within limit {:.1}%",
                pct, config.max_censoring_pct
            ),
        }
    } else {
        SuitabilityCheck {
            passed: false,
            reason: format!(
                "censoring {:.1}% exceeds limit {:.1}%",
                pct, config.max_censoring_pct
            ),
        }
    };

    Suitability {
        sample_size,
        censoring,
    }
}

/// Censoring rate over raw flag columns that may carry missing entries.
///
/// A missing flag counts as not-censored, and its row stays in the
/// denominator.
pub fn censoring_pct(flags: &[Option<bool>]) -> f64 {
    if flags.is_empty() {
        return 0.0;
    }
    let censored = flags.iter().filter(|f| f.unwrap_or(false)).count();
    100.0 * censored as f64 / flags.len() as f64
}
