// File: crates/hazard-examples/src/bin/panel.rs
// Summary: Minimal example that renders a single area panel to SVG.

use chrono::NaiveDate;
use hazard_core::{Dashboard, HazardRecord, HazardSeries, RenderOptions, SeriesStyle};

fn main() {
    // Build a simple yearly series
    let data = [
        (2000, 12.0),
        (2004, 18.0),
        (2008, 9.0),
        (2012, 22.0),
        (2016, 17.0),
        (2020, 25.0),
    ];
    let records = data
        .iter()
        .map(|&(y, v)| HazardRecord::new(NaiveDate::from_ymd_opt(y, 1, 1).unwrap(), v))
        .collect();
    let series = HazardSeries::new("Wildfires", records).expect("valid series");

    let mut dashboard = Dashboard::new();
    dashboard.add_panel(series, SeriesStyle::new("gradient1", "#A833FF33", "#A833FF"));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/out/example_panel.svg");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    dashboard.render_to_svg(&opts, &out).expect("render to svg");
    println!("Wrote {}", out.display());
}
