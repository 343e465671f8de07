//! # peergrid-core
//!
//! The peer similarity ranking engine: given a catalog of airports carrying
//! a few numeric and categorical attributes and a nominated target, produce
//! ranked lists of the nearest peers along one or more metrics, an optional
//! weighted composite ranking, and optional region-partitioned peer sets.
//!
//! The engine is a pure, synchronous, in-memory batch computation over small
//! datasets (hundreds of rows). It performs no I/O, holds no shared state,
//! and produces deterministic ordering for identical inputs.
//!
//! ## Example
//!
//! ```rust
//! use peergrid_core::{
//!     Airport, Catalog, Metric, RankingEngine, SelectionStrategy,
//! };
//!
//! let catalog = Catalog::new(vec![
//!     Airport {
//!         id: "LAX".into(),
//!         name: "Los Angeles International".into(),
//!         country: "United States".into(),
//!         region_group: "Western-Pacific".into(),
//!         total_passengers: 75_000_000.0,
//!         yoy_growth_pct: Some(5.0),
//!         share_of_region_pct: 32.1,
//!     },
//!     Airport {
//!         id: "SFO".into(),
//!         name: "San Francisco International".into(),
//!         country: "United States".into(),
//!         region_group: "Western-Pacific".into(),
//!         total_passengers: 51_000_000.0,
//!         yoy_growth_pct: Some(4.2),
//!         share_of_region_pct: 21.8,
//!     },
//! ]).unwrap();
//!
//! let engine = RankingEngine::new();
//! let strategy = SelectionStrategy::SingleMetric { metric: Metric::Passengers, k: 5 };
//! let output = engine.rank(&catalog, "LAX", &strategy).unwrap();
//! assert_eq!(output.per_metric[&Metric::Passengers][0].airport.id, "SFO");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐    ┌────────────┐    ┌───────────────────────────┐
//! │ Catalog  │───>│  Engine    │───>│ RankingOutput             │
//! │ snapshot │    │ (strategy) │    │ per_metric / composite /  │
//! └──────────┘    └─────┬──────┘    │ regional / union          │
//!                       │           └───────────────────────────┘
//!          ┌────────────┼─────────────┐
//!     ┌────▼────┐  ┌────▼─────┐  ┌────▼──────┐
//!     │Normalize│  │ Selector │  │Partitioner│
//!     └─────────┘  └──────────┘  └───────────┘
//! ```

pub mod catalog;
pub mod composite;
pub mod config;
pub mod delta;
pub mod engine;
pub mod error;
pub mod metric;
pub mod normalize;
pub mod partition;
pub mod select;

// Re-export main types for convenience
pub use catalog::{Airport, Catalog, UNKNOWN_REGION};
pub use composite::CompositeWeights;
pub use config::{
    SelectionStrategy, DEFAULT_IN_GROUP_K, DEFAULT_OUT_GROUP_K, DEFAULT_TOP_K,
};
pub use delta::delta_display;
pub use engine::{CompositePeer, MetricPeer, RankingEngine, RankingOutput, RegionalPeers};
pub use error::{Error, Result};
pub use metric::{Metric, ResolvedMetric};
pub use normalize::EPSILON;
