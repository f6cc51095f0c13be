// File: crates/hazard-core/src/gradient.rs
// Summary: Per-series visual identity and vertical gradient definitions.

use crate::svg::SvgWriter;

/// Visual identity of one series: the gradient its area fill references and
/// the colors used for fill stops and line stroke. Create-once per run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesStyle {
    pub gradient_id: String,
    pub fill_color: String,
    pub stroke_color: String,
}

impl SeriesStyle {
    pub fn new(
        gradient_id: impl Into<String>,
        fill_color: impl Into<String>,
        stroke_color: impl Into<String>,
    ) -> Self {
        Self {
            gradient_id: gradient_id.into(),
            fill_color: fill_color.into(),
            stroke_color: stroke_color.into(),
        }
    }

    /// `url(#id)` reference for a fill attribute.
    pub fn fill_url(&self) -> String {
        format!("url(#{})", self.gradient_id)
    }
}

/// The five hazard styles, one per category in dashboard order
/// (drought, flood, extreme temperature, storm, wildfire).
pub fn default_palette() -> Vec<SeriesStyle> {
    vec![
        SeriesStyle::new("gradient1", "#18A8EB33", "#18A8EB"),
        SeriesStyle::new("gradient2", "#FF573333", "#FF5733"),
        SeriesStyle::new("gradient3", "#33FF5733", "#33FF57"),
        SeriesStyle::new("gradient4", "#FF33A833", "#FF33A8"),
        SeriesStyle::new("gradient5", "#A833FF33", "#A833FF"),
    ]
}

/// Register one vertical linear gradient per style inside `<defs>`: full
/// opacity at the top fading to 0.1 at the baseline.
pub fn write_defs(svg: &mut SvgWriter, styles: &[SeriesStyle]) {
    svg.open("defs", &[]);
    for style in styles {
        svg.open(
            "linearGradient",
            &[
                ("id", style.gradient_id.as_str()),
                ("x1", "0%"),
                ("y1", "0%"),
                ("x2", "0%"),
                ("y2", "100%"),
            ],
        );
        svg.leaf(
            "stop",
            &[
                ("offset", "0%"),
                ("stop-color", style.fill_color.as_str()),
                ("stop-opacity", "1"),
            ],
        );
        svg.leaf(
            "stop",
            &[
                ("offset", "100%"),
                ("stop-color", style.fill_color.as_str()),
                ("stop-opacity", "0.1"),
            ],
        );
        svg.close("linearGradient");
    }
    svg.close("defs");
}
