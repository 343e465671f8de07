//! Engine configuration
//!
//! One invocation is configured by a [`SelectionStrategy`]: the repository's
//! historical grid variants (one-metric nearest-K, weighted composite,
//! region-partitioned) are all expressions of the same engine behind this
//! tag. Validation happens before any similarity computation.

use crate::composite::CompositeWeights;
use crate::error::{Error, Result};
use crate::metric::Metric;
use serde::{Deserialize, Serialize};

/// Default top-K for single-metric and composite rankings.
pub const DEFAULT_TOP_K: usize = 5;
/// Default in-group peer count for regional ranking.
pub const DEFAULT_IN_GROUP_K: usize = 10;
/// Default out-of-group peer count for regional ranking.
pub const DEFAULT_OUT_GROUP_K: usize = 5;

/// How peers are selected for one engine invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "strategy", rename_all = "kebab-case")]
pub enum SelectionStrategy {
    /// Nearest K along one metric
    SingleMetric { metric: Metric, k: usize },
    /// Weighted blend of all metrics, plus per-metric top-K reporting
    Composite { weights: CompositeWeights, k: usize },
    /// In-group / out-of-group peer sets around the target's region
    RegionPartitioned {
        metric: Metric,
        in_group_k: usize,
        out_group_k: usize,
    },
}

impl SelectionStrategy {
    /// Validate counts and weights up front.
    pub fn validate(&self) -> Result<()> {
        match self {
            SelectionStrategy::SingleMetric { k, .. } => require_positive("k", *k),
            SelectionStrategy::Composite { weights, k } => {
                require_positive("k", *k)?;
                weights.normalized().map(|_| ())
            }
            SelectionStrategy::RegionPartitioned {
                in_group_k,
                out_group_k,
                ..
            } => {
                require_positive("in_group_k", *in_group_k)?;
                require_positive("out_group_k", *out_group_k)
            }
        }
    }
}

fn require_positive(name: &str, count: usize) -> Result<()> {
    if count == 0 {
        return Err(Error::InvalidConfiguration(format!(
            "{name} must be positive"
        )));
    }
    Ok(())
}
