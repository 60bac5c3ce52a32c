//! # censtrend
//!
//! Decision-tree trend analysis for environmental water-quality time
//! series containing left-censored observations (non-detects).
//!
//! Given a series of concentration measurements for one parameter at one
//! station, the crate classifies the data (censoring level,
//! detection-limit multiplicity, sample-size adequacy, seasonality) and
//! routes it to the correct monotonic trend test: Mann-Kendall or Seasonal
//! Kendall, each in a censored or uncensored variant.
//!
//! ```text
//! raw records -> parse -> recensor -> classify -> dispatch -> MethodResult
//! ```
//!
//! The statistical estimators themselves (Kendall-tau tests, censored
//! group-difference tests, robust quantile fits) are external
//! collaborators behind the [`estimator::EstimatorSuite`] trait; this
//! crate carries the decision logic, not the numerics.

pub mod analysis;
pub mod censor;
pub mod classify;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod error;
pub mod estimator;
pub mod parse;

pub use error::{Result, TrendError};

pub mod prelude {
    pub use crate::analysis::{analyze_dataset, DatasetReport};
    pub use crate::config::AnalysisConfig;
    pub use crate::core::{
        CensoredSummary, ClassificationResult, Dataset, MethodResult, Observation, Season,
        TrendMethod,
    };
    pub use crate::error::{Result, TrendError};
    pub use crate::estimator::{EstimatorSuite, GroupTest, QuantileModel, TrendFit};
}
