//! Detection-limit parsing of raw value tokens.
//!
//! A token with a case-insensitive leading `L` marker is a non-detect; the
//! numeric remainder becomes both the recorded value and the detection
//! limit. Unparseable remainders degrade to `None` per element, never
//! aborting the batch.

/// Parsed value tokens as parallel, input-length, order-preserving arrays.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedValues {
    /// Whether the token carried the non-detect marker.
    pub censored: Vec<bool>,
    /// Numeric value; `None` when the token did not parse.
    pub values: Vec<Option<f64>>,
    /// Detection limit, present iff censored and parseable.
    pub detection_limits: Vec<Option<f64>>,
}

impl ParsedValues {
    pub fn len(&self) -> usize {
        self.censored.len()
    }

    pub fn is_empty(&self) -> bool {
        self.censored.is_empty()
    }

    /// Share of non-detects in percent of ALL tokens.
    ///
    /// Tokens whose value failed to parse stay in the denominator; their
    /// marker flag counts as recorded. A missing flag is never inferred as
    /// censored.
    pub fn censoring_pct(&self) -> f64 {
        if self.censored.is_empty() {
            return 0.0;
        }
        let censored = self.censored.iter().filter(|c| **c).count();
        100.0 * censored as f64 / self.censored.len() as f64
    }
}

/// Parse raw value tokens into censoring flags, values, and detection limits.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> ParsedValues {
    let mut parsed = ParsedValues::default();
    for token in tokens {
        let token = token.as_ref().trim();
        let (censored, remainder) = match token.strip_prefix(['L', 'l']) {
            Some(rest) => (true, rest),
            None => (false, token),
        };
        let value = remainder.trim().parse::<f64>().ok().filter(|v| v.is_finite());
        parsed.censored.push(censored);
        parsed.values.push(value);
        parsed.detection_limits.push(if censored { value } else { None });
    }
    parsed
}
