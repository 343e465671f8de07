//! Neighbor Selector
//!
//! Ranks a candidate pool against the target along exactly one metric and
//! returns the K closest. Ordering is fully deterministic: absolute
//! difference ascending, then total passengers descending, then id
//! ascending, independent of input iteration order.

use crate::catalog::Airport;
use ahash::AHashSet;
use ordered_float::OrderedFloat;

/// One selected peer with the value it was ranked on.
#[derive(Debug, Clone)]
pub struct Neighbor<'a> {
    pub airport: &'a Airport,
    /// The candidate's resolved value on the ranked metric
    pub value: f64,
    /// Absolute distance to the target's value
    pub abs_diff: f64,
}

/// Select the `k` candidates whose `values` lie closest to `target_value`.
///
/// `values` must be index-aligned with `candidates` (one resolved value per
/// candidate). Duplicate ids keep their first post-sort occurrence. The
/// result length is `min(k, pool size)`; an empty pool yields an empty list
/// rather than an error.
pub fn nearest<'a>(
    candidates: &[&'a Airport],
    values: &[f64],
    target_value: f64,
    k: usize,
) -> Vec<Neighbor<'a>> {
    debug_assert_eq!(candidates.len(), values.len());

    let mut ranked: Vec<Neighbor<'a>> = candidates
        .iter()
        .zip(values)
        .map(|(&airport, &value)| Neighbor {
            airport,
            value,
            abs_diff: (value - target_value).abs(),
        })
        .collect();

    ranked.sort_by(|a, b| {
        OrderedFloat(a.abs_diff)
            .cmp(&OrderedFloat(b.abs_diff))
            .then_with(|| {
                OrderedFloat(b.airport.total_passengers)
                    .cmp(&OrderedFloat(a.airport.total_passengers))
            })
            .then_with(|| a.airport.id.cmp(&b.airport.id))
    });

    let mut seen = AHashSet::with_capacity(ranked.len());
    ranked.retain(|n| seen.insert(n.airport.id.clone()));
    ranked.truncate(k);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airport(id: &str, pax: f64) -> Airport {
        Airport {
            id: id.to_string(),
            name: String::new(),
            country: String::new(),
            region_group: String::new(),
            total_passengers: pax,
            yoy_growth_pct: None,
            share_of_region_pct: 0.0,
        }
    }

    fn ids<'a>(neighbors: &'a [Neighbor<'a>]) -> Vec<&'a str> {
        neighbors.iter().map(|n| n.airport.id.as_str()).collect()
    }

    #[test]
    fn test_nearest_orders_by_abs_diff() {
        let a = airport("AAA", 100.0);
        let b = airport("BBB", 100.0);
        let c = airport("CCC", 100.0);
        let pool = vec![&a, &b, &c];

        let result = nearest(&pool, &[50.0, 12.0, 90.0], 10.0, 3);
        assert_eq!(ids(&result), vec!["BBB", "AAA", "CCC"]);
        assert_eq!(result[0].abs_diff, 2.0);
    }

    #[test]
    fn test_bounded_length() {
        let a = airport("AAA", 1.0);
        let b = airport("BBB", 2.0);
        let pool = vec![&a, &b];

        assert_eq!(nearest(&pool, &[1.0, 2.0], 0.0, 1).len(), 1);
        // K larger than the pool returns the whole pool
        assert_eq!(nearest(&pool, &[1.0, 2.0], 0.0, 10).len(), 2);
        assert!(nearest(&[], &[], 0.0, 5).is_empty());
    }

    #[test]
    fn test_tie_break_by_passengers_then_id() {
        // All candidates equidistant: order resolves by descending
        // passengers, then ascending id.
        let a = airport("AAA", 500.0);
        let b = airport("BBB", 900.0);
        let c = airport("CCC", 900.0);
        let pool = vec![&a, &b, &c];

        let result = nearest(&pool, &[7.0, 7.0, 7.0], 7.0, 3);
        assert_eq!(ids(&result), vec!["BBB", "CCC", "AAA"]);
    }

    #[test]
    fn test_deterministic_across_input_order() {
        let a = airport("AAA", 1_000.0);
        let b = airport("BBB", 1_000.0);
        let c = airport("CCC", 1_000.0);

        let forward = nearest(&[&a, &b, &c], &[5.0, 5.0, 5.0], 5.0, 3);
        let reversed = nearest(&[&c, &b, &a], &[5.0, 5.0, 5.0], 5.0, 3);
        assert_eq!(ids(&forward), ids(&reversed));
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let a1 = airport("AAA", 100.0);
        let a2 = airport("AAA", 100.0);
        let b = airport("BBB", 100.0);
        let pool = vec![&a1, &a2, &b];

        let result = nearest(&pool, &[1.0, 9.0, 2.0], 0.0, 3);
        assert_eq!(ids(&result), vec!["AAA", "BBB"]);
        assert_eq!(result[0].value, 1.0);
    }
}
