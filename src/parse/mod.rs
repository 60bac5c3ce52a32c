//! Parsing of raw field records.
//!
//! Turns raw value tokens and timestamp strings into observations.
//! Failures degrade per element; a batch never aborts on one bad record.

mod timestamp;
mod value;

pub use timestamp::{classify, classify_timestamp, parse_timestamp, TemporalInfo, TIMESTAMP_FORMAT};
pub use value::{parse_tokens, ParsedValues};

use crate::core::Observation;
use crate::error::{Result, TrendError};

/// Combine parsed value tokens with raw timestamps into observations.
///
/// Elements whose value or timestamp failed to parse are dropped here;
/// censoring-rate accounting over the full batch belongs to
/// [`ParsedValues::censoring_pct`], which runs before this step.
pub fn build_observations<S: AsRef<str>>(
    parsed: &ParsedValues,
    timestamps: &[S],
) -> Result<Vec<Observation>> {
    if parsed.len() != timestamps.len() {
        return Err(TrendError::DimensionMismatch {
            expected: parsed.len(),
            got: timestamps.len(),
        });
    }

    let mut observations = Vec::with_capacity(parsed.len());
    for i in 0..parsed.len() {
        let Some(value) = parsed.values[i] else {
            continue;
        };
        let Some(ts) = parse_timestamp(timestamps[i].as_ref()) else {
            continue;
        };
        let mut obs = if parsed.censored[i] {
            Observation::nondetect(value, ts)
        } else {
            Observation::detect(value, ts)
        };
        obs.season = classify(ts).map(|info| info.season);
        observations.push(obs);
    }
    Ok(observations)
}
