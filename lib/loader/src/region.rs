//! Region group assignment
//!
//! A [`RegionScheme`] maps a location key (a state or country code) to an
//! opaque region label. Schemes are explicit configuration passed into the
//! loader, never ambient tables: the engine treats the resulting labels as
//! opaque, so any taxonomy works - a 9-bucket administrative scheme, a
//! 4-bucket simplification, or a country-to-region lookup.

use crate::error::Result;
use ahash::AHashMap;
use peergrid_core::UNKNOWN_REGION;
use std::path::Path;

/// Mapping from location keys to region group labels.
#[derive(Debug, Clone, Default)]
pub struct RegionScheme {
    by_key: AHashMap<String, String>,
}

impl RegionScheme {
    /// Build from (region label, member keys) groups, e.g.
    /// `("New England", ["ME", "NH", "VT", ...])`.
    pub fn from_groups<'a, I, K>(groups: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, K)>,
        K: IntoIterator<Item = &'a str>,
    {
        let mut by_key = AHashMap::new();
        for (region, keys) in groups {
            for key in keys {
                by_key.insert(key.to_ascii_uppercase(), region.to_string());
            }
        }
        Self { by_key }
    }

    /// Load a two-column `key,region` CSV (header row optional in spirit:
    /// a `key`/`code` header row is skipped if present).
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;
        let mut by_key = AHashMap::new();
        for record in reader.records() {
            let record = record?;
            let (Some(key), Some(region)) = (record.get(0), record.get(1)) else {
                continue;
            };
            let key = key.trim();
            let region = region.trim();
            if key.is_empty() || region.is_empty() {
                continue;
            }
            if key.eq_ignore_ascii_case("key") || key.eq_ignore_ascii_case("code") {
                continue;
            }
            by_key.insert(key.to_ascii_uppercase(), region.to_string());
        }
        Ok(Self { by_key })
    }

    /// Region label for a key; "Unknown" when unmapped.
    pub fn region_of(&self, key: &str) -> &str {
        self.by_key
            .get(&key.to_ascii_uppercase())
            .map(String::as_str)
            .unwrap_or(UNKNOWN_REGION)
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
