//! CSV catalog loader
//!
//! Source files disagree on header wording from year to year, so each
//! logical column is discovered by matching normalized headers against a
//! candidate list, the way the original grid builder sniffed spreadsheet
//! layouts. Rows without an id or passenger count are skipped, duplicate
//! ids keep their first occurrence, and region shares are derived from
//! per-group passenger totals before the catalog is handed to the engine.

use crate::error::{Error, Result};
use crate::region::RegionScheme;
use ahash::{AHashMap, AHashSet};
use peergrid_core::{Airport, Catalog, UNKNOWN_REGION};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const ID_CANDIDATES: &[&str] = &["iata", "airport code", "code"];
const NAME_CANDIDATES: &[&str] = &["airport name", "airport", "name"];
const COUNTRY_CANDIDATES: &[&str] = &["country"];
const CITY_STATE_CANDIDATES: &[&str] = &["city/state", "citystate", "city, state", "city / state"];
const PASSENGERS_CANDIDATES: &[&str] = &["total passengers", "passengers total", "total pax"];
const GROWTH_CANDIDATES: &[&str] = &[
    "% chg 2024-2023",
    "% chg 2024 - 2023",
    "% chg 2023-2022",
    "yoy %",
    "% change",
];
const REGION_CANDIDATES: &[&str] = &["region group", "region", "faa region"];

/// Loads a [`Catalog`] from a traffic CSV.
///
/// Region groups come from a `region` column when the file has one,
/// otherwise from the configured [`RegionScheme`] keyed on the state code
/// (the last whitespace token of the city/state column). Unresolvable rows
/// get `"Unknown"`.
#[derive(Debug, Clone)]
pub struct CsvCatalogLoader {
    path: PathBuf,
    regions: RegionScheme,
    /// Restrict to one country (matched as a substring, case-insensitive),
    /// mirroring the original "United States" filter. `None` keeps all rows.
    country_filter: Option<String>,
}

impl CsvCatalogLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            regions: RegionScheme::default(),
            country_filter: None,
        }
    }

    pub fn with_regions(mut self, regions: RegionScheme) -> Self {
        self.regions = regions;
        self
    }

    pub fn with_country_filter(mut self, country: impl Into<String>) -> Self {
        self.country_filter = Some(country.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read, sniff, filter and derive; emits a catalog conforming to the
    /// engine's schema.
    pub fn load(&self) -> Result<Catalog> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_path(&self.path)?;

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(normalize_header)
            .collect();

        let col_id = pick(&headers, ID_CANDIDATES)
            .ok_or_else(|| Error::MissingColumn("id", ID_CANDIDATES.join(", ")))?;
        let col_pax = pick(&headers, PASSENGERS_CANDIDATES)
            .ok_or_else(|| Error::MissingColumn("total passengers", PASSENGERS_CANDIDATES.join(", ")))?;
        let col_name = pick(&headers, NAME_CANDIDATES);
        let col_country = pick(&headers, COUNTRY_CANDIDATES);
        let col_city_state = pick(&headers, CITY_STATE_CANDIDATES);
        let col_growth = pick(&headers, GROWTH_CANDIDATES);
        let col_region = pick(&headers, REGION_CANDIDATES);

        debug!(
            path = %self.path.display(),
            id = col_id, passengers = col_pax,
            "catalog columns resolved"
        );

        let mut records: Vec<Airport> = Vec::new();
        let mut seen: AHashSet<String> = AHashSet::new();
        for (row_idx, record) in reader.records().enumerate() {
            let record = record?;
            let field = |col: Option<usize>| col.and_then(|i| record.get(i)).unwrap_or("");

            let country = field(col_country).to_string();
            if let Some(filter) = &self.country_filter {
                if !country.to_ascii_lowercase().contains(&filter.to_ascii_lowercase()) {
                    continue;
                }
            }

            let id = field(Some(col_id)).to_ascii_uppercase();
            let passengers = parse_number(field(Some(col_pax)));
            let (id, passengers) = match (id.is_empty(), passengers) {
                (false, Some(p)) if p >= 0.0 => (id, p),
                _ => {
                    warn!(row = row_idx + 2, "skipping row without id or passenger count");
                    continue;
                }
            };
            if !seen.insert(id.clone()) {
                warn!(id = %id, "duplicate id in source, keeping first occurrence");
                continue;
            }

            let region_group = {
                let from_column = field(col_region);
                if !from_column.is_empty() {
                    from_column.to_string()
                } else {
                    match state_code(field(col_city_state)) {
                        Some(state) => self.regions.region_of(state).to_string(),
                        None => UNKNOWN_REGION.to_string(),
                    }
                }
            };

            records.push(Airport {
                id,
                name: field(col_name).to_string(),
                country,
                region_group,
                total_passengers: passengers,
                yoy_growth_pct: parse_number(field(col_growth)),
                share_of_region_pct: 0.0,
            });
        }

        if records.is_empty() {
            return Err(Error::Empty);
        }

        derive_region_shares(&mut records);
        debug!(rows = records.len(), "catalog loaded");
        Ok(Catalog::new(records)?)
    }
}

/// Lowercase and collapse internal whitespace, as the original header
/// normalizer did.
fn normalize_header(header: &str) -> String {
    header
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// First candidate present among the normalized headers.
fn pick(headers: &[String], candidates: &[&str]) -> Option<usize> {
    candidates
        .iter()
        .find_map(|c| headers.iter().position(|h| h == c))
}

/// Parse a numeric cell, tolerating thousands separators and percent signs.
fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, ',' | '%' | ' '))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Last whitespace token of a city/state cell, e.g. "Los Angeles CA" -> "CA".
fn state_code(city_state: &str) -> Option<&str> {
    city_state.split_whitespace().last()
}

/// Fill `share_of_region_pct` from per-group passenger totals, rounded to
/// two decimals.
fn derive_region_shares(records: &mut [Airport]) {
    let mut totals: AHashMap<&str, f64> = AHashMap::new();
    for a in records.iter() {
        *totals.entry(a.region_group.as_str()).or_insert(0.0) += a.total_passengers;
    }
    let totals: AHashMap<String, f64> = totals
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    for a in records.iter_mut() {
        let total = totals.get(&a.region_group).copied().unwrap_or(0.0);
        a.share_of_region_pct = if total > 0.0 {
            (a.total_passengers / total * 10_000.0).round() / 100.0
        } else {
            0.0
        };
    }
}
