//! Metric definitions and value resolution
//!
//! A [`Metric`] names one ranked attribute of an airport record. Resolution
//! turns the target and candidate pool into concrete per-row values, filling
//! missing growth with the candidate-pool median before any similarity math
//! runs.

use crate::catalog::Airport;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rankable attribute of an airport record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Total passenger throughput - right-skewed magnitude, log-scale normalizer
    Passengers,
    /// Year-over-year growth percent - linear normalizer, median fallback
    Growth,
    /// Share of the region group's passengers, percent - linear normalizer
    Share,
}

impl Metric {
    /// All metrics in their canonical reporting order.
    pub const ALL: [Metric; 3] = [Metric::Passengers, Metric::Growth, Metric::Share];

    /// Raw value of this metric on a record; growth may be absent.
    pub fn raw(&self, airport: &Airport) -> Option<f64> {
        match self {
            Metric::Passengers => Some(airport.total_passengers),
            Metric::Growth => airport.yoy_growth_pct,
            Metric::Share => Some(airport.share_of_region_pct),
        }
    }

    /// True for metrics already expressed in percent. Controls the
    /// percentage-point fallback in delta display.
    pub fn percentage_like(&self) -> bool {
        matches!(self, Metric::Growth | Metric::Share)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::Passengers => "passengers",
            Metric::Growth => "growth",
            Metric::Share => "share",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "passengers" | "pax" | "size" => Ok(Metric::Passengers),
            "growth" => Ok(Metric::Growth),
            "share" => Ok(Metric::Share),
            other => Err(format!("unknown metric: {other}")),
        }
    }
}

/// Per-candidate metric values with the target's reference value, after
/// missing-data fallback has been applied.
#[derive(Debug, Clone)]
pub struct ResolvedMetric {
    /// The target's value on this metric
    pub target: f64,
    /// One value per pool candidate, in pool order
    pub values: Vec<f64>,
}

impl ResolvedMetric {
    /// Resolve a metric over the target and candidate pool.
    ///
    /// Growth gaps - on candidates or on the target itself - are filled with
    /// the candidate-pool median. A pool with no growth values at all
    /// resolves to 0.0 rather than failing; missing data alone is never an
    /// error.
    pub fn resolve(metric: Metric, target: &Airport, pool: &[&Airport]) -> Self {
        let fallback = match metric {
            Metric::Growth => pool_median(pool.iter().filter_map(|a| a.yoy_growth_pct)),
            _ => 0.0,
        };
        let target_value = metric.raw(target).unwrap_or(fallback);
        let values = pool
            .iter()
            .map(|a| metric.raw(a).unwrap_or(fallback))
            .collect();
        Self {
            target: target_value,
            values,
        }
    }
}

/// Median of the present values; 0.0 for an empty set.
fn pool_median(values: impl Iterator<Item = f64>) -> f64 {
    let mut present: Vec<OrderedFloat<f64>> = values.map(OrderedFloat).collect();
    if present.is_empty() {
        return 0.0;
    }
    present.sort_unstable();
    let mid = present.len() / 2;
    if present.len() % 2 == 1 {
        present[mid].into_inner()
    } else {
        (present[mid - 1].into_inner() + present[mid].into_inner()) / 2.0
    }
}
