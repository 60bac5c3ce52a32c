//! Analysis thresholds.
//!
//! All decision thresholds live in one immutable configuration struct that
//! is passed into every component, so tests can vary them per case.

/// Configuration for dataset classification and method dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Minimum number of observations for a dataset to be trend-suitable.
    pub min_sample_size: usize,
    /// Maximum tolerated share of non-detects, in percent (0 to 100).
    pub max_censoring_pct: f64,
    /// Significance level for the seasonality decision.
    pub alpha: f64,
    /// Minimum number of distinct season groups before a seasonality test runs.
    pub min_seasons: usize,
    /// Quantile probabilities for the censored summary, ascending.
    pub quantiles: [f64; 3],
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_sample_size: 50,
            max_censoring_pct: 50.0,
            alpha: 0.05,
            min_seasons: 2,
            quantiles: [0.05, 0.50, 0.95],
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum sample size.
    pub fn with_min_sample_size(mut self, n: usize) -> Self {
        self.min_sample_size = n;
        self
    }

    /// Set the maximum censoring percentage, clamped to 0..=100.
    pub fn with_max_censoring_pct(mut self, pct: f64) -> Self {
        self.max_censoring_pct = pct.clamp(0.0, 100.0);
        self
    }

    /// Set the significance level, clamped to 0..=1.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Set the minimum number of distinct season groups.
    pub fn with_min_seasons(mut self, n: usize) -> Self {
        self.min_seasons = n;
        self
    }

    /// Set the summary quantile probabilities, each clamped to 0..=1.
    pub fn with_quantiles(mut self, quantiles: [f64; 3]) -> Self {
        self.quantiles = quantiles.map(|q| q.clamp(0.0, 1.0));
        self
    }
}
