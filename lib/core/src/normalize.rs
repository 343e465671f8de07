//! Metric normalizers
//!
//! Turn raw per-candidate values into similarity scores where 1.0 means
//! identical to the target and lower is less similar.
//!
//! Two normalizers exist:
//!
//! - [`log_scale_similarities`] for right-skewed magnitudes (throughput)
//! - [`linear_similarities`] for percentage-like metrics (growth, share)
//!
//! The linear normalizer always lands in [0.0, 1.0]. The log-scale
//! normalizer divides by the maximum log-scaled candidate *magnitude* in the
//! pool rather than the maximum difference, and can therefore leave [0.0,
//! 1.0] when the target dwarfs every candidate. That denominator is kept
//! as-is; see `test_log_scale_can_leave_unit_range` for the pinned example.

use crate::metric::{Metric, ResolvedMetric};

/// Division guard for degenerate pools.
pub const EPSILON: f64 = 1e-9;

/// Similarity on a log(1+x) scale, one score per pool candidate.
///
/// `d = |ln(1+c) - ln(1+t)|`, `sim = 1 - d / (max_i |ln(1+c_i)| + EPSILON)`.
pub fn log_scale_similarities(values: &[f64], target: f64) -> Vec<f64> {
    let log_target = target.ln_1p();
    let max_magnitude = values
        .iter()
        .map(|v| v.ln_1p().abs())
        .fold(0.0_f64, f64::max);
    values
        .iter()
        .map(|v| 1.0 - (v.ln_1p() - log_target).abs() / (max_magnitude + EPSILON))
        .collect()
}

/// Linear-difference similarity, one score per pool candidate.
///
/// `d_i = |c_i - t|`, `sim_i = 1 - d_i / (max_j d_j + EPSILON)`.
pub fn linear_similarities(values: &[f64], target: f64) -> Vec<f64> {
    let diffs: Vec<f64> = values.iter().map(|v| (v - target).abs()).collect();
    let max_diff = diffs.iter().copied().fold(0.0_f64, f64::max);
    diffs.iter().map(|d| 1.0 - d / (max_diff + EPSILON)).collect()
}

/// Similarity scores for a resolved metric, using the normalizer that metric
/// calls for.
pub fn similarities(metric: Metric, resolved: &ResolvedMetric) -> Vec<f64> {
    match metric {
        Metric::Passengers => log_scale_similarities(&resolved.values, resolved.target),
        Metric::Growth | Metric::Share => {
            linear_similarities(&resolved.values, resolved.target)
        }
    }
}
