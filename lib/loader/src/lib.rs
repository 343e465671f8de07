//! # peergrid-loader
//!
//! Turns raw traffic CSVs into a [`Catalog`] conforming to the engine's
//! schema. All the tabular mess lives here: header layouts vary across
//! source years, so columns are discovered by name sniffing against
//! candidate lists; region groups come from an explicit, caller-supplied
//! [`RegionScheme`] (or a `region` column in the file itself); and
//! `share_of_region_pct` is derived from region passenger totals. The
//! ranking engine never sees any of this.

pub mod error;
pub mod region;
pub mod csv_loader;

pub use csv_loader::CsvCatalogLoader;
pub use error::{Error, Result};
pub use region::RegionScheme;
