//! # peergrid
//!
//! Peer similarity ranking for airport catalogs.
//!
//! Given a catalog of airports with a few numeric and categorical
//! attributes and a nominated target, peergrid produces ranked lists of the
//! nearest peers along one or more metrics, an optional weighted composite
//! ranking, and optional region-partitioned peer sets.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install peergrid
//! peergrid --catalog data/traffic.csv --target LAX composite --size-weight 85 --growth-weight 5
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use peergrid::prelude::*;
//!
//! let catalog = CsvCatalogLoader::new("data/traffic.csv")
//!     .with_country_filter("United States")
//!     .load()
//!     .unwrap();
//!
//! let engine = RankingEngine::new();
//! let strategy = SelectionStrategy::Composite {
//!     weights: CompositeWeights::new(85.0, 5.0),
//!     k: DEFAULT_TOP_K,
//! };
//! let output = engine.rank(&catalog, "LAX", &strategy).unwrap();
//! println!("{}", peergrid::report::to_text(&output));
//! ```
//!
//! ## Crate Structure
//!
//! - [`peergrid_core`](https://docs.rs/peergrid-core) - catalog model and the ranking engine
//! - [`peergrid_loader`](https://docs.rs/peergrid-loader) - CSV catalog loading with header sniffing
//! - [`peergrid_report`](https://docs.rs/peergrid-report) - JSON, HTML and text renderers

pub use peergrid_core as core;
pub use peergrid_loader as loader;
pub use peergrid_report as report;

/// Commonly used types, re-exported.
pub mod prelude {
    pub use peergrid_core::{
        Airport, Catalog, CompositeWeights, Error, Metric, RankingEngine, RankingOutput,
        SelectionStrategy, DEFAULT_IN_GROUP_K, DEFAULT_OUT_GROUP_K, DEFAULT_TOP_K,
    };
    pub use peergrid_loader::{CsvCatalogLoader, RegionScheme};
}
