//! Ranking engine facade
//!
//! Wires the normalizer, selector, composite scorer and partitioner behind a
//! single entry point. The engine is pure and synchronous: it reads a
//! catalog snapshot, computes, and returns an owned result structure for the
//! renderer. For a fixed catalog, target and strategy, repeated invocations
//! produce identical ordering.

use crate::catalog::{Airport, Catalog};
use crate::composite;
use crate::config::SelectionStrategy;
use crate::delta::delta_display;
use crate::error::Result;
use crate::metric::{Metric, ResolvedMetric};
use crate::partition;
use crate::select::{self, Neighbor};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// One peer in a per-metric list, with its delta against the target.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricPeer {
    pub airport: Airport,
    /// Signed percentage (or percentage-point) difference from the target's
    /// value; empty when not expressible
    pub delta: String,
}

/// One peer in the composite ranking.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CompositePeer {
    pub airport: Airport,
    /// Weighted sum of per-metric similarities
    pub score: f64,
}

/// In-group / out-of-group peer sets. `out_group` is empty when the target's
/// region group was unresolved and the partitioner fell back to a global
/// selection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionalPeers {
    pub in_group: Vec<MetricPeer>,
    pub out_group: Vec<MetricPeer>,
}

/// Full result of one engine invocation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankingOutput {
    pub target: Airport,
    /// Ordered peer lists per metric
    pub per_metric: BTreeMap<Metric, Vec<MetricPeer>>,
    /// Present only for the composite strategy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite: Option<Vec<CompositePeer>>,
    /// Present only for the region-partitioned strategy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regional: Option<RegionalPeers>,
    /// Sorted ids covering the target plus every returned peer
    pub union: BTreeSet<String>,
}

impl RankingOutput {
    /// Every peer id in the result, across all slices.
    fn collect_union(&mut self) {
        let mut union = BTreeSet::new();
        union.insert(self.target.id.clone());
        for peers in self.per_metric.values() {
            union.extend(peers.iter().map(|p| p.airport.id.clone()));
        }
        if let Some(composite) = &self.composite {
            union.extend(composite.iter().map(|p| p.airport.id.clone()));
        }
        if let Some(regional) = &self.regional {
            union.extend(regional.in_group.iter().map(|p| p.airport.id.clone()));
            union.extend(regional.out_group.iter().map(|p| p.airport.id.clone()));
        }
        self.union = union;
    }
}

/// The peer similarity ranking engine.
///
/// Stateless; one instance can serve any number of invocations.
#[derive(Debug, Clone, Default)]
pub struct RankingEngine;

impl RankingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Rank the catalog's candidate pool around `target_id` per `strategy`.
    ///
    /// Fails with `InvalidConfiguration` before any computation when the
    /// strategy is malformed, and with `TargetNotFound` when `target_id` is
    /// absent. Empty slices (exhausted partitions) are returned empty, never
    /// as errors.
    pub fn rank(
        &self,
        catalog: &Catalog,
        target_id: &str,
        strategy: &SelectionStrategy,
    ) -> Result<RankingOutput> {
        strategy.validate()?;
        let (target, pool) = catalog.split(target_id)?;

        let mut output = RankingOutput {
            target: target.clone(),
            per_metric: BTreeMap::new(),
            composite: None,
            regional: None,
            union: BTreeSet::new(),
        };

        match strategy {
            SelectionStrategy::SingleMetric { metric, k } => {
                let peers = rank_metric(target, &pool, *metric, *k);
                output.per_metric.insert(*metric, peers);
            }
            SelectionStrategy::Composite { weights, k } => {
                // The grid shows one row per metric alongside the blended row.
                for metric in Metric::ALL {
                    let peers = rank_metric(target, &pool, metric, *k);
                    output.per_metric.insert(metric, peers);
                }
                let scored = composite::rank(target, &pool, weights, *k)?;
                output.composite = Some(
                    scored
                        .into_iter()
                        .map(|s| CompositePeer {
                            airport: s.airport.clone(),
                            score: s.score,
                        })
                        .collect(),
                );
            }
            SelectionStrategy::RegionPartitioned {
                metric,
                in_group_k,
                out_group_k,
            } => {
                let parts = partition::rank(target, &pool, *metric, *in_group_k, *out_group_k);
                let target_value = ResolvedMetric::resolve(*metric, target, &pool).target;
                output.regional = Some(RegionalPeers {
                    in_group: to_metric_peers(parts.in_group, *metric, target_value),
                    out_group: to_metric_peers(parts.out_group, *metric, target_value),
                });
            }
        }

        output.collect_union();
        Ok(output)
    }
}

/// Nearest-K along one metric, with deltas attached.
fn rank_metric(target: &Airport, pool: &[&Airport], metric: Metric, k: usize) -> Vec<MetricPeer> {
    let resolved = ResolvedMetric::resolve(metric, target, pool);
    let neighbors = select::nearest(pool, &resolved.values, resolved.target, k);
    to_metric_peers(neighbors, metric, resolved.target)
}

fn to_metric_peers(
    neighbors: Vec<Neighbor<'_>>,
    metric: Metric,
    target_value: f64,
) -> Vec<MetricPeer> {
    neighbors
        .into_iter()
        .map(|n| MetricPeer {
            delta: delta_display(Some(n.value), Some(target_value), metric.percentage_like()),
            airport: n.airport.clone(),
        })
        .collect()
}
