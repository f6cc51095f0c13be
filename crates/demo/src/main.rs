// File: crates/demo/src/main.rs
// Summary: Demo loads the five hazard CSVs and renders both dashboard variants to SVG.

use anyhow::{Context, Result};
use hazard_core::{load_series, CurveKind, Dashboard, HazardSeries, RenderOptions};
use std::path::{Path, PathBuf};

/// Canonical input files in dashboard order.
const HAZARD_FILES: [(&str, &str); 5] = [
    ("data_drought.csv", "Droughts"),
    ("data_flood.csv", "Floods"),
    ("data_extremeTemp.csv", "Extreme Temperature Events"),
    ("data_storm.csv", "Storms"),
    ("data_wildfire.csv", "Wildfires"),
];

/// How many of the series the interactive variant shows.
const HOVER_PANEL_COUNT: usize = 3;

fn main() -> Result<()> {
    // Accept the data directory from CLI or fall back to the bundled samples.
    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("data"));
    println!("Using data directory: {}", data_dir.display());

    // Loads happen one after another; the first failure aborts the run.
    let mut all: Vec<HazardSeries> = Vec::with_capacity(HAZARD_FILES.len());
    for (file, title) in HAZARD_FILES {
        let path = data_dir.join(file);
        let series = load_series(&path, title)
            .with_context(|| format!("failed to load series '{title}'"))?;
        println!("Loaded {} records from {}", series.len(), path.display());
        all.push(series);
    }

    let out_dir = PathBuf::from("target/out");

    // Variant 1: all five hazards, basis smoothing, static.
    let dashboard = Dashboard::with_default_styles(all.clone());
    let opts = RenderOptions::default();
    let out = out_dir.join("hazards.svg");
    dashboard
        .render_to_svg(&opts, &out)
        .with_context(|| format!("failed to write {}", out.display()))?;
    println!("Wrote {}", out.display());

    // Variant 2: the first three hazards with cardinal smoothing and hover
    // scaffolding for embeddings that attach pointer handlers.
    let subset: Vec<HazardSeries> = all.into_iter().take(HOVER_PANEL_COUNT).collect();
    let hover_dashboard = Dashboard::with_default_styles(subset);
    let hover_opts = RenderOptions {
        curve: CurveKind::Cardinal { tension: 0.5 },
        interactive: true,
        ..RenderOptions::default()
    };
    let hover_out = out_dir.join("hazards_hover.svg");
    hover_dashboard
        .render_to_svg(&hover_opts, &hover_out)
        .with_context(|| format!("failed to write {}", hover_out.display()))?;
    println!("Wrote {}", hover_out.display());

    Ok(())
}
