// File: crates/hazard-core/src/axis.rs
// Summary: Bottom time axis: year ticks, labels, dashed full-height guide lines.

use chrono::{Datelike, NaiveDate};

use crate::grid::{linspace, nice_year_step, year_ticks};
use crate::path::fmt_px;
use crate::scale::TimeScale;
use crate::svg::SvgWriter;

const GUIDE_STROKE: &str = "#E5E5DE";
const GUIDE_DASH: &str = "4 4";

/// Bottom-anchored axis. Tick size is zero and the domain line is never
/// drawn; each tick carries a dashed vertical guide spanning the chart.
#[derive(Clone, Copy, Debug)]
pub struct BottomAxis {
    pub tick_count: usize,
    pub tick_padding: f64,
}

impl Default for BottomAxis {
    fn default() -> Self {
        Self { tick_count: 5, tick_padding: 10.0 }
    }
}

impl BottomAxis {
    /// Tick dates for `scale`: nice year boundaries inside the domain, or an
    /// even spread when the domain covers less than a year.
    pub fn ticks(&self, scale: &TimeScale) -> Vec<NaiveDate> {
        let (d0, d1) = scale.domain();
        let span_years = d1.year() - d0.year();
        if span_years >= 1 {
            let step = nice_year_step(span_years, self.tick_count);
            return year_ticks(d0.year(), d1.year(), step)
                .into_iter()
                .filter_map(|y| NaiveDate::from_ymd_opt(y, 1, 1))
                .filter(|d| *d >= d0 && *d <= d1)
                .collect();
        }
        let (p0, p1) = (scale.to_px(d0), scale.to_px(d1));
        let mut out: Vec<NaiveDate> = linspace(p0, p1, self.tick_count)
            .into_iter()
            .map(|px| scale.from_px(px))
            .collect();
        out.dedup();
        out
    }

    /// Render the axis group at the bottom of a panel. Labels are centered
    /// under their tick with the year number.
    pub fn render(&self, svg: &mut SvgWriter, scale: &TimeScale, bounded_height: f64) {
        svg.open(
            "g",
            &[
                ("class", "x-axis"),
                ("transform", &format!("translate(0,{})", fmt_px(bounded_height))),
                ("fill", "none"),
                ("font-size", "10"),
                ("font-family", "sans-serif"),
                ("text-anchor", "middle"),
            ],
        );
        for date in self.ticks(scale) {
            let x = scale.to_px(date);
            svg.open(
                "g",
                &[("class", "tick"), ("transform", &format!("translate({},0)", fmt_px(x)))],
            );
            svg.leaf(
                "line",
                &[
                    ("y1", &fmt_px(-bounded_height)),
                    ("y2", "0"),
                    ("stroke", GUIDE_STROKE),
                    ("stroke-dasharray", GUIDE_DASH),
                ],
            );
            svg.text_element(
                "text",
                &[
                    ("fill", "currentColor"),
                    ("y", &fmt_px(self.tick_padding)),
                    ("dy", "0.71em"),
                ],
                &date.format("%Y").to_string(),
            );
            svg.close("g");
        }
        svg.close("g");
    }
}
