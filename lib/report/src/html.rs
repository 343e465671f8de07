//! Standalone competitor-grid HTML page
//!
//! Emits the selector contract downstream tooling scrapes: `.container`
//! holds one `.row` per category, each with a `.cat` label and a `.grid` of
//! `.chip` elements carrying `.code` and `.dev` spans; the target's chip
//! additionally carries the `origin` class.

use chrono::{SecondsFormat, Utc};
use peergrid_core::{Metric, MetricPeer, RankingOutput};

/// Render a self-contained HTML page for the ranking result.
pub fn to_html(output: &RankingOutput) -> String {
    let generated = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let target = &output.target;

    let mut rows = String::new();
    for (metric, peers) in &output.per_metric {
        rows.push_str(&category_row(&label(*metric), target, peers, true));
    }
    if let Some(composite) = &output.composite {
        let chips: String = composite
            .iter()
            .map(|p| chip(&p.airport.id, &format!("{:.3}", p.score), false))
            .collect();
        rows.push_str(&row("Composite", &format!("{}{}", chip(&target.id, "", true), chips)));
    }
    if let Some(regional) = &output.regional {
        rows.push_str(&category_row("In-region peers", target, &regional.in_group, true));
        if !regional.out_group.is_empty() {
            rows.push_str(&category_row(
                "Out-of-region peers",
                target,
                &regional.out_group,
                false,
            ));
        }
    }

    format!(
        r#"<!doctype html>
<meta charset="utf-8">
<title>{target_id} — Competitor Grid</title>
<style>
  body {{ margin:0; padding:24px; font:16px/1.45 -apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,Arial,sans-serif; background:#f6f8fb; color:#1f2937; }}
  .container {{ max-width:1100px; margin:0 auto; background:#fff; border-radius:12px; box-shadow:0 4px 20px rgba(0,0,0,.08); padding:20px; }}
  h1 {{ margin:0 0 12px 0; font-size:22px; }}
  .row {{ display:flex; gap:12px; align-items:flex-start; padding:10px 0; border-bottom:1px solid #eee; }}
  .cat {{ font-weight:700; width:160px; flex:none; }}
  .grid {{ display:flex; flex-wrap:wrap; gap:6px; }}
  .chip {{ display:inline-flex; align-items:center; gap:6px; font-family:ui-monospace,SFMono-Regular,Menlo,Consolas,monospace; font-size:13px; background:#f5f7fb; padding:4px 8px; border-radius:6px; }}
  .chip.origin {{ outline:2px solid #E74C3C; outline-offset:1px; }}
  .chip .dev {{ color:#6b7280; font-size:12px; }}
  .muted {{ color:#6b7280; font-size:13px; margin-top:10px; }}
</style>
<div class="container">
  <h1>{target_id} — {target_name}</h1>
{rows}  <div class="muted">Generated {generated}. Deltas are vs {target_id}.</div>
</div>
"#,
        target_id = escape(&target.id),
        target_name = escape(&target.name),
        rows = rows,
        generated = generated,
    )
}

fn label(metric: Metric) -> String {
    match metric {
        Metric::Passengers => "Passengers".to_string(),
        Metric::Growth => "Growth".to_string(),
        Metric::Share => "Share".to_string(),
    }
}

fn category_row(cat: &str, target: &peergrid_core::Airport, peers: &[MetricPeer], lead_with_target: bool) -> String {
    let mut chips = String::new();
    if lead_with_target {
        chips.push_str(&chip(&target.id, "", true));
    }
    for p in peers {
        chips.push_str(&chip(&p.airport.id, &p.delta, false));
    }
    row(cat, &chips)
}

fn row(cat: &str, chips: &str) -> String {
    format!(
        "  <div class=\"row\"><div class=\"cat\">{}</div><div class=\"grid\">{}</div></div>\n",
        escape(cat),
        chips
    )
}

fn chip(code: &str, dev: &str, origin: bool) -> String {
    let class = if origin { "chip origin" } else { "chip" };
    if dev.is_empty() {
        format!("<span class=\"{class}\"><span class=\"code\">{}</span></span>", escape(code))
    } else {
        format!(
            "<span class=\"{class}\"><span class=\"code\">{}</span><span class=\"dev\">{}</span></span>",
            escape(code),
            escape(dev)
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
