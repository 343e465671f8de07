//! Plain-text rendering for terminal output

use peergrid_core::{Metric, MetricPeer, RankingOutput};
use std::fmt::Write;

/// Render an aligned text summary of the ranking result.
pub fn to_text(output: &RankingOutput) -> String {
    let mut out = String::new();
    let target = &output.target;
    let _ = writeln!(
        out,
        "Target: {} ({})  passengers={:.0}  growth={}  share={:.2}%",
        target.id,
        if target.name.is_empty() { "-" } else { &target.name },
        target.total_passengers,
        target
            .yoy_growth_pct
            .map(|g| format!("{g:+.1}%"))
            .unwrap_or_else(|| "n/a".to_string()),
        target.share_of_region_pct,
    );

    for (metric, peers) in &output.per_metric {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}:", heading(*metric));
        write_peers(&mut out, peers);
    }

    if let Some(composite) = &output.composite {
        let _ = writeln!(out);
        let _ = writeln!(out, "Composite:");
        for (rank, p) in composite.iter().enumerate() {
            let _ = writeln!(out, "  {:>2}. {:<4} score={:.4}", rank + 1, p.airport.id, p.score);
        }
    }

    if let Some(regional) = &output.regional {
        let _ = writeln!(out);
        let _ = writeln!(out, "In-region peers ({}):", target.region_group);
        write_peers(&mut out, &regional.in_group);
        let _ = writeln!(out, "Out-of-region peers:");
        if regional.out_group.is_empty() {
            let _ = writeln!(out, "  (none)");
        } else {
            write_peers(&mut out, &regional.out_group);
        }
    }

    let _ = writeln!(out);
    let union: Vec<&str> = output.union.iter().map(String::as_str).collect();
    let _ = writeln!(out, "Union: {}", union.join(", "));
    out
}

fn heading(metric: Metric) -> &'static str {
    match metric {
        Metric::Passengers => "Nearest by passengers",
        Metric::Growth => "Nearest by growth",
        Metric::Share => "Nearest by share",
    }
}

fn write_peers(out: &mut String, peers: &[MetricPeer]) {
    if peers.is_empty() {
        let _ = writeln!(out, "  (none)");
        return;
    }
    for (rank, p) in peers.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>2}. {:<4} {:<28} {}",
            rank + 1,
            p.airport.id,
            p.airport.name,
            p.delta,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peergrid_core::{Airport, Catalog, RankingEngine, SelectionStrategy};

    #[test]
    fn test_text_summary() {
        let catalog = Catalog::new(vec![
            Airport {
                id: "AAA".into(),
                name: "Alpha".into(),
                country: String::new(),
                region_group: "West".into(),
                total_passengers: 1_000.0,
                yoy_growth_pct: Some(5.0),
                share_of_region_pct: 40.0,
            },
            Airport {
                id: "BBB".into(),
                name: "Bravo".into(),
                country: String::new(),
                region_group: "East".into(),
                total_passengers: 1_100.0,
                yoy_growth_pct: None,
                share_of_region_pct: 60.0,
            },
        ])
        .unwrap();

        let output = RankingEngine::new()
            .rank(
                &catalog,
                "AAA",
                &SelectionStrategy::RegionPartitioned {
                    metric: Metric::Passengers,
                    in_group_k: 10,
                    out_group_k: 5,
                },
            )
            .unwrap();

        let text = to_text(&output);
        assert!(text.contains("Target: AAA"));
        assert!(text.contains("In-region peers (West):"));
        assert!(text.contains("(none)"));
        assert!(text.contains("BBB"));
        assert!(text.contains("Union: AAA, BBB"));
    }
}
