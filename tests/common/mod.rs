//! Shared estimator suites for integration tests.
//!
//! `ScriptedSuite` returns canned outcomes for exercising dispatch and
//! containment. `NaiveSuite` is a small reference implementation (pairwise
//! Kendall statistics, Kruskal-Wallis, empirical quantiles) standing in for
//! a production statistics library.

#![allow(dead_code)]

use censtrend::core::Season;
use censtrend::error::{Result, TrendError};
use censtrend::estimator::{EstimatorSuite, GroupTest, QuantileModel, TrendFit};
use statrs::distribution::{ChiSquared, ContinuousCDF, Normal};
use std::collections::HashMap;

/// Suite returning the same canned outcome from every operation.
pub struct ScriptedSuite {
    pub trend: Result<TrendFit>,
    pub group: Result<GroupTest>,
    pub quantile_fit_fails: bool,
}

impl ScriptedSuite {
    pub fn happy() -> Self {
        Self {
            trend: Ok(TrendFit {
                tau: 0.4,
                p_value: 0.01,
                slope: 0.003,
            }),
            group: Ok(GroupTest {
                statistic: 1.0,
                p_value: 0.7,
            }),
            quantile_fit_fails: false,
        }
    }

    pub fn everything_fails() -> Self {
        Self {
            trend: Err(TrendError::Estimator("scripted trend failure".to_string())),
            group: Err(TrendError::Estimator("scripted group failure".to_string())),
            quantile_fit_fails: true,
        }
    }
}

struct LinearModel;

impl QuantileModel for LinearModel {
    fn quantile(&self, p: f64) -> f64 {
        p
    }
}

impl EstimatorSuite for ScriptedSuite {
    fn censored_seasonal_trend(
        &self,
        _: &[f64],
        _: &[f64],
        _: &[bool],
        _: &[Season],
    ) -> Result<TrendFit> {
        self.trend.clone()
    }

    fn censored_trend(&self, _: &[f64], _: &[bool], _: &[f64]) -> Result<TrendFit> {
        self.trend.clone()
    }

    fn uncensored_seasonal_trend(
        &self,
        _: &[f64],
        _: &[Season],
        _: &[f64],
    ) -> Result<TrendFit> {
        self.trend.clone()
    }

    fn uncensored_trend(&self, _: &[f64], _: &[f64]) -> Result<TrendFit> {
        self.trend.clone()
    }

    fn censored_group_difference(
        &self,
        _: &[f64],
        _: &[bool],
        _: &[Season],
    ) -> Result<GroupTest> {
        self.group.clone()
    }

    fn rank_group_difference(&self, _: &[f64], _: &[Season]) -> Result<GroupTest> {
        self.group.clone()
    }

    fn censored_quantile_fit(&self, _: &[f64], _: &[bool]) -> Result<Box<dyn QuantileModel>> {
        if self.quantile_fit_fails {
            Err(TrendError::Estimator("scripted fit failure".to_string()))
        } else {
            Ok(Box::new(LinearModel))
        }
    }
}

/// Minimal reference statistics: pairwise Kendall S with a normal
/// approximation, Theil-Sen slopes, Kruskal-Wallis, empirical quantiles.
pub struct NaiveSuite;

fn kendall_s(values: &[f64], times: &[f64]) -> (f64, f64) {
    let n = values.len();
    let mut s = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let d = (values[j] - values[i]) * (times[j] - times[i]);
            if d > 0.0 {
                s += 1.0;
            } else if d < 0.0 {
                s -= 1.0;
            }
        }
    }
    let var = (n * (n - 1) * (2 * n + 5)) as f64 / 18.0;
    (s, var)
}

fn pairwise_slopes(values: &[f64], times: &[f64], slopes: &mut Vec<f64>) {
    let n = values.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let dt = times[j] - times[i];
            if dt != 0.0 {
                slopes.push((values[j] - values[i]) / dt);
            }
        }
    }
}

fn median(sorted: &mut Vec<f64>) -> f64 {
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

fn two_sided_p(s: f64, var: f64) -> Result<f64> {
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| TrendError::Estimator(e.to_string()))?;
    if var <= 0.0 {
        return Err(TrendError::Estimator("zero variance".to_string()));
    }
    // Continuity-corrected normal approximation of the S statistic.
    let z = if s > 0.0 {
        (s - 1.0) / var.sqrt()
    } else if s < 0.0 {
        (s + 1.0) / var.sqrt()
    } else {
        0.0
    };
    Ok((2.0 * (1.0 - normal.cdf(z.abs()))).clamp(0.0, 1.0))
}

fn kendall_fit(values: &[f64], times: &[f64]) -> Result<TrendFit> {
    if values.len() < 3 {
        return Err(TrendError::Estimator(
            "need at least 3 observations".to_string(),
        ));
    }
    if values.len() != times.len() {
        return Err(TrendError::DimensionMismatch {
            expected: values.len(),
            got: times.len(),
        });
    }
    let (s, var) = kendall_s(values, times);
    let n = values.len();
    let pairs = (n * (n - 1) / 2) as f64;
    let mut slopes = Vec::new();
    pairwise_slopes(values, times, &mut slopes);
    if slopes.is_empty() {
        return Err(TrendError::Estimator("no distinct times".to_string()));
    }
    Ok(TrendFit {
        tau: s / pairs,
        p_value: two_sided_p(s, var)?,
        slope: median(&mut slopes),
    })
}

fn seasonal_kendall_fit(
    values: &[f64],
    times: &[f64],
    seasons: &[Season],
) -> Result<TrendFit> {
    let mut groups: HashMap<Season, (Vec<f64>, Vec<f64>)> = HashMap::new();
    for ((v, t), season) in values.iter().zip(times.iter()).zip(seasons.iter()) {
        let entry = groups.entry(*season).or_default();
        entry.0.push(*v);
        entry.1.push(*t);
    }

    let mut total_s = 0.0;
    let mut total_var = 0.0;
    let mut total_pairs = 0.0;
    let mut slopes = Vec::new();
    for (group_values, group_times) in groups.values() {
        let n = group_values.len();
        if n < 2 {
            continue;
        }
        let (s, var) = kendall_s(group_values, group_times);
        total_s += s;
        total_var += var;
        total_pairs += (n * (n - 1) / 2) as f64;
        pairwise_slopes(group_values, group_times, &mut slopes);
    }
    if total_pairs == 0.0 || slopes.is_empty() {
        return Err(TrendError::Estimator(
            "no comparable pairs within seasons".to_string(),
        ));
    }
    Ok(TrendFit {
        tau: total_s / total_pairs,
        p_value: two_sided_p(total_s, total_var)?,
        slope: median(&mut slopes),
    })
}

fn kruskal_wallis(values: &[f64], groups: &[Season]) -> Result<GroupTest> {
    let n = values.len();
    if n < 3 {
        return Err(TrendError::Estimator(
            "need at least 3 observations".to_string(),
        ));
    }

    // Average ranks with ties.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap());
    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        let rank = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            ranks[idx] = rank;
        }
        i = j + 1;
    }

    let mut rank_sums: HashMap<Season, (f64, usize)> = HashMap::new();
    for (rank, group) in ranks.iter().zip(groups.iter()) {
        let entry = rank_sums.entry(*group).or_default();
        entry.0 += rank;
        entry.1 += 1;
    }
    let k = rank_sums.len();
    if k < 2 {
        return Err(TrendError::InsufficientGroups { needed: 2, got: k });
    }

    let nf = n as f64;
    let h = rank_sums
        .values()
        .map(|(sum, count)| sum * sum / *count as f64)
        .sum::<f64>()
        * 12.0
        / (nf * (nf + 1.0))
        - 3.0 * (nf + 1.0);

    let chi = ChiSquared::new((k - 1) as f64)
        .map_err(|e| TrendError::Estimator(e.to_string()))?;
    Ok(GroupTest {
        statistic: h,
        p_value: (1.0 - chi.cdf(h)).clamp(0.0, 1.0),
    })
}

struct EmpiricalModel {
    sorted: Vec<f64>,
}

impl QuantileModel for EmpiricalModel {
    fn quantile(&self, p: f64) -> f64 {
        let n = self.sorted.len();
        if n == 1 {
            return self.sorted[0];
        }
        let h = (n - 1) as f64 * p.clamp(0.0, 1.0);
        let lo = h.floor() as usize;
        let hi = (lo + 1).min(n - 1);
        self.sorted[lo] + (h - lo as f64) * (self.sorted[hi] - self.sorted[lo])
    }
}

impl EstimatorSuite for NaiveSuite {
    fn censored_seasonal_trend(
        &self,
        times: &[f64],
        values: &[f64],
        _censored: &[bool],
        seasons: &[Season],
    ) -> Result<TrendFit> {
        seasonal_kendall_fit(values, times, seasons)
    }

    fn censored_trend(&self, values: &[f64], _censored: &[bool], times: &[f64]) -> Result<TrendFit> {
        kendall_fit(values, times)
    }

    fn uncensored_seasonal_trend(
        &self,
        values: &[f64],
        seasons: &[Season],
        normalized_times: &[f64],
    ) -> Result<TrendFit> {
        seasonal_kendall_fit(values, normalized_times, seasons)
    }

    fn uncensored_trend(&self, values: &[f64], normalized_times: &[f64]) -> Result<TrendFit> {
        kendall_fit(values, normalized_times)
    }

    fn censored_group_difference(
        &self,
        values: &[f64],
        _censored: &[bool],
        groups: &[Season],
    ) -> Result<GroupTest> {
        kruskal_wallis(values, groups)
    }

    fn rank_group_difference(&self, values: &[f64], groups: &[Season]) -> Result<GroupTest> {
        kruskal_wallis(values, groups)
    }

    fn censored_quantile_fit(
        &self,
        values: &[f64],
        censored: &[bool],
    ) -> Result<Box<dyn QuantileModel>> {
        let detected = censored.iter().filter(|c| !**c).count();
        if detected < 3 {
            return Err(TrendError::Estimator(
                "too few detected values for a robust fit".to_string(),
            ));
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        Ok(Box::new(EmpiricalModel { sorted }))
    }
}
