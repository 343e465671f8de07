//! Region Partitioner
//!
//! Produces peer sets confined to and excluded from the target's region
//! group, each ranked independently by the Neighbor Selector. When the
//! target's group is unresolved the partition step is skipped in favor of a
//! single global selection, and the out-of-group slice is left observably
//! empty.

use crate::catalog::Airport;
use crate::metric::{Metric, ResolvedMetric};
use crate::select::{self, Neighbor};

/// Ranked peers inside and outside the target's region group.
#[derive(Debug, Clone)]
pub struct Partitioned<'a> {
    pub in_group: Vec<Neighbor<'a>>,
    pub out_group: Vec<Neighbor<'a>>,
}

impl<'a> Partitioned<'a> {
    /// Peer ids in union order: in-group ranked order first, then out-group
    /// ranked order. The caller prepends the target.
    pub fn union_ids(&self) -> impl Iterator<Item = &str> {
        self.in_group
            .iter()
            .chain(&self.out_group)
            .map(|n| n.airport.id.as_str())
    }
}

/// Partition the pool by the target's region group and rank each side.
///
/// An empty partition (target alone in its group, or no outsiders) yields an
/// empty list for that slice; it is not an error.
pub fn rank<'a>(
    target: &Airport,
    pool: &[&'a Airport],
    metric: Metric,
    in_group_k: usize,
    out_group_k: usize,
) -> Partitioned<'a> {
    if !target.has_region() {
        // Unresolved group: one global selection sized to the full budget,
        // with the out-group slice explicitly empty.
        let resolved = ResolvedMetric::resolve(metric, target, pool);
        let in_group = select::nearest(pool, &resolved.values, resolved.target, in_group_k + out_group_k);
        return Partitioned {
            in_group,
            out_group: Vec::new(),
        };
    }

    let (in_pool, out_pool): (Vec<&Airport>, Vec<&Airport>) = pool
        .iter()
        .copied()
        .partition(|a| a.region_group == target.region_group);

    let in_resolved = ResolvedMetric::resolve(metric, target, &in_pool);
    let out_resolved = ResolvedMetric::resolve(metric, target, &out_pool);

    Partitioned {
        in_group: select::nearest(&in_pool, &in_resolved.values, in_resolved.target, in_group_k),
        out_group: select::nearest(&out_pool, &out_resolved.values, out_resolved.target, out_group_k),
    }
}
