//! Catalog of airport records
//!
//! The catalog is the full set of entities available for ranking. It is an
//! immutable snapshot for the duration of one engine invocation: the engine
//! reads from it and never writes back.

use crate::error::{Error, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Region label used when a record's group could not be resolved.
pub const UNKNOWN_REGION: &str = "Unknown";

/// A single airport record in the catalog.
///
/// `region_group` is an opaque categorical label assigned by the loader;
/// the engine makes no assumption about the grouping scheme behind it.
/// `share_of_region_pct` is derived externally as this airport's passengers
/// divided by the sum of passengers across its region group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Airport {
    /// Short alphanumeric code (IATA), unique key across the catalog
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
    /// Opaque categorical group label; "Unknown" or empty means unresolved
    #[serde(default)]
    pub region_group: String,
    /// Nonnegative annual throughput
    pub total_passengers: f64,
    /// Year-over-year growth, percent; may be absent for any record
    #[serde(default)]
    pub yoy_growth_pct: Option<f64>,
    /// Share of the region group's total passengers, percent
    #[serde(default)]
    pub share_of_region_pct: f64,
}

impl Airport {
    /// True if the region group is unresolved ("Unknown" or empty).
    pub fn has_region(&self) -> bool {
        !self.region_group.is_empty() && self.region_group != UNKNOWN_REGION
    }
}

/// An ordered, id-indexed collection of airport records.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<Airport>,
    index: AHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from an ordered list of records.
    ///
    /// Fails with [`Error::DuplicateId`] if two records share an id, so that
    /// lookups by id are always unambiguous.
    pub fn new(records: Vec<Airport>) -> Result<Self> {
        let mut index = AHashMap::with_capacity(records.len());
        for (i, airport) in records.iter().enumerate() {
            if index.insert(airport.id.clone(), i).is_some() {
                return Err(Error::DuplicateId(airport.id.clone()));
            }
        }
        Ok(Self { records, index })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&Airport> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// Iterate records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Airport> {
        self.records.iter()
    }

    /// Split into the target record and its candidate pool (catalog minus
    /// target), preserving catalog order within the pool.
    ///
    /// Fails with [`Error::TargetNotFound`] if `target_id` is absent.
    pub fn split<'a>(&'a self, target_id: &str) -> Result<(&'a Airport, Vec<&'a Airport>)> {
        let target = self
            .get(target_id)
            .ok_or_else(|| Error::TargetNotFound(target_id.to_string()))?;
        let pool = self
            .records
            .iter()
            .filter(|a| a.id != target.id)
            .collect();
        Ok((target, pool))
    }
}
