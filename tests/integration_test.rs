// Integration tests for peergrid: loader -> engine -> renderers
use peergrid_core::{CompositeWeights, Error, Metric, RankingEngine, SelectionStrategy};
use peergrid_loader::{CsvCatalogLoader, RegionScheme};
use std::io::Write;

const TRAFFIC_CSV: &str = "\
Country,City/State,Airport Name,Airport Code,Total Passengers,% Chg 2024-2023
United States,Los Angeles CA,Los Angeles Intl,LAX,\"75,050,000\",5.2
United States,San Francisco CA,San Francisco Intl,SFO,\"51,300,000\",4.1
United States,New York NY,John F Kennedy Intl,JFK,\"62,500,000\",3.0
United States,Newark NJ,Newark Liberty Intl,EWR,\"49,100,000\",
United States,Chicago IL,O'Hare Intl,ORD,\"73,800,000\",6.4
Canada,Toronto ON,Toronto Pearson Intl,YYZ,\"44,800,000\",7.9
";

fn scheme() -> RegionScheme {
    RegionScheme::from_groups([
        ("Western-Pacific", vec!["CA", "NV", "AZ", "HI"]),
        ("Eastern", vec!["NY", "NJ", "PA"]),
        ("Great Lakes", vec!["OH", "MI", "IN", "IL", "WI"]),
    ])
}

fn load_catalog() -> peergrid_core::Catalog {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(TRAFFIC_CSV.as_bytes()).unwrap();
    CsvCatalogLoader::new(file.path())
        .with_regions(scheme())
        .with_country_filter("United States")
        .load()
        .unwrap()
}

#[test]
fn test_loader_to_engine_nearest() {
    let catalog = load_catalog();
    assert_eq!(catalog.len(), 5); // YYZ filtered out

    let output = RankingEngine::new()
        .rank(
            &catalog,
            "LAX",
            &SelectionStrategy::SingleMetric {
                metric: Metric::Passengers,
                k: 3,
            },
        )
        .unwrap();

    let peers = &output.per_metric[&Metric::Passengers];
    assert_eq!(peers.len(), 3);
    assert_eq!(peers[0].airport.id, "ORD");
    assert!(peers.iter().all(|p| p.airport.id != "LAX"));
}

#[test]
fn test_composite_full_grid() {
    let catalog = load_catalog();
    let output = RankingEngine::new()
        .rank(
            &catalog,
            "LAX",
            &SelectionStrategy::Composite {
                weights: CompositeWeights::new(85.0, 5.0),
                k: 5,
            },
        )
        .unwrap();

    // One row per metric plus the blended row
    assert_eq!(output.per_metric.len(), 3);
    let composite = output.composite.as_ref().unwrap();
    assert_eq!(composite.len(), 4);
    for pair in composite.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    // Union covers the target and every peer
    assert!(output.union.contains("LAX"));
    assert!(output.union.len() <= catalog.len());
}

#[test]
fn test_regional_partition_with_loader_regions() {
    let catalog = load_catalog();
    let output = RankingEngine::new()
        .rank(
            &catalog,
            "LAX",
            &SelectionStrategy::RegionPartitioned {
                metric: Metric::Passengers,
                in_group_k: 10,
                out_group_k: 5,
            },
        )
        .unwrap();

    let regional = output.regional.as_ref().unwrap();
    let in_ids: Vec<_> = regional
        .in_group
        .iter()
        .map(|p| p.airport.id.as_str())
        .collect();
    assert_eq!(in_ids, vec!["SFO"]); // only other Western-Pacific airport
    assert!(!regional.out_group.is_empty());
    assert!(regional
        .out_group
        .iter()
        .all(|p| p.airport.region_group != "Western-Pacific"));
}

#[test]
fn test_invalid_weights_reported_before_ranking() {
    let catalog = load_catalog();
    let result = RankingEngine::new().rank(
        &catalog,
        "LAX",
        &SelectionStrategy::Composite {
            weights: CompositeWeights::new(90.0, 20.0),
            k: 5,
        },
    );
    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
}

#[test]
fn test_missing_target_fails_whole_invocation() {
    let catalog = load_catalog();
    let result = RankingEngine::new().rank(
        &catalog,
        "YYZ", // filtered out by country
        &SelectionStrategy::SingleMetric {
            metric: Metric::Growth,
            k: 5,
        },
    );
    assert!(matches!(result, Err(Error::TargetNotFound(_))));
}

#[test]
fn test_end_to_end_determinism() {
    let catalog = load_catalog();
    let engine = RankingEngine::new();
    let strategy = SelectionStrategy::Composite {
        weights: CompositeWeights::default(),
        k: 10,
    };

    let a = engine.rank(&catalog, "JFK", &strategy).unwrap();
    let b = engine.rank(&catalog, "JFK", &strategy).unwrap();
    assert_eq!(
        peergrid_report::to_json(&a).unwrap(),
        peergrid_report::to_json(&b).unwrap()
    );
}

#[test]
fn test_renderers_cover_all_slices() {
    let catalog = load_catalog();
    let output = RankingEngine::new()
        .rank(
            &catalog,
            "JFK",
            &SelectionStrategy::RegionPartitioned {
                metric: Metric::Passengers,
                in_group_k: 10,
                out_group_k: 5,
            },
        )
        .unwrap();

    let json = peergrid_report::to_json(&output).unwrap();
    assert!(json.contains("\"regional\""));

    let html = peergrid_report::to_html(&output);
    assert!(html.contains("chip origin"));
    assert!(html.contains("JFK"));

    let text = peergrid_report::to_text(&output);
    assert!(text.contains("Target: JFK"));
}
