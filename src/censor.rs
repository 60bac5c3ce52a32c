//! Detection-limit reconciliation.
//!
//! Censored trend estimators require a single censoring threshold. When a
//! series carries several distinct detection limits, every observation at
//! or below the highest limit is recensored at that limit, yielding one
//! conservative threshold.

use crate::core::{Dataset, Observation};
use crate::error::{Result, TrendError};

/// Outcome of recensoring a dataset to its highest detection limit.
#[derive(Debug, Clone, PartialEq)]
pub struct Recensored {
    /// The rewritten dataset. The input is never mutated.
    pub dataset: Dataset,
    /// The single detection limit applied.
    pub max_dl_used: f64,
    /// How many observations were changed.
    pub n_recensored: usize,
}

/// Collapse multiple detection limits into the highest one.
///
/// Every observation with `value <= max_dl` becomes a non-detect at
/// `max_dl`; observations above it are unchanged. Calling this on a
/// dataset without any censored observation is a caller bug (the
/// multiplicity check gates this step) and fails fast.
pub fn recensor(dataset: &Dataset) -> Result<Recensored> {
    let max_dl = dataset
        .observations()
        .iter()
        .filter_map(|o| o.detection_limit)
        .fold(f64::NEG_INFINITY, f64::max);
    if !max_dl.is_finite() {
        return Err(TrendError::NoCensoredObservations);
    }

    let mut n_recensored = 0;
    let observations = dataset
        .observations()
        .iter()
        .map(|o| {
            if o.value <= max_dl {
                if !o.censored || o.value != max_dl {
                    n_recensored += 1;
                }
                let mut recensored = Observation::nondetect(max_dl, o.timestamp);
                recensored.season = o.season;
                recensored
            } else {
                o.clone()
            }
        })
        .collect();

    Ok(Recensored {
        dataset: Dataset::new(dataset.parameter(), dataset.station(), observations)?,
        max_dl_used: max_dl,
        n_recensored,
    })
}
