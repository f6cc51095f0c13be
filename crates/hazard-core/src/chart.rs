// File: crates/hazard-core/src/chart.rs
// Summary: Dashboard assembly and per-panel SVG rendering pipeline.

use std::path::Path;

use crate::axis::BottomAxis;
use crate::curve::CurveKind;
use crate::error::ChartError;
use crate::gradient::{self, SeriesStyle};
use crate::layout::GridLayout;
use crate::path::{area_path, fmt_px};
use crate::scale::{LinearScale, TimeScale};
use crate::series::HazardSeries;
use crate::svg::SvgWriter;
use crate::types::Dimensions;

/// Marker radius for the hover scaffolding of interactive panels.
const MARKER_RADIUS: f64 = 4.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub dimensions: Dimensions,
    pub curve: CurveKind,
    /// Emit per-panel hover scaffolding (overlay rect, hidden marker and
    /// label) for embeddings that wire up pointer events.
    pub interactive: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            curve: CurveKind::Basis,
            interactive: false,
        }
    }
}

/// One chart cell: a validated series plus its visual identity.
#[derive(Clone, Debug)]
pub struct Panel {
    pub series: HazardSeries,
    pub style: SeriesStyle,
}

/// A fixed grid of area charts sharing one SVG canvas. Panels render
/// independently; nothing is shared across them but the layout descriptor.
#[derive(Clone, Debug, Default)]
pub struct Dashboard {
    panels: Vec<Panel>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_panel(&mut self, series: HazardSeries, style: SeriesStyle) {
        self.panels.push(Panel { series, style });
    }

    /// Pair each series with the default palette entry for its position.
    /// More series than palette entries cycles the palette; gradient ids are
    /// re-numbered so they stay unique within the document.
    pub fn with_default_styles(all: Vec<HazardSeries>) -> Self {
        let palette = gradient::default_palette();
        let mut dashboard = Self::new();
        for (i, series) in all.into_iter().enumerate() {
            let base = &palette[i % palette.len()];
            let style = SeriesStyle::new(
                format!("gradient{}", i + 1),
                base.fill_color.clone(),
                base.stroke_color.clone(),
            );
            dashboard.add_panel(series, style);
        }
        dashboard
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Build the complete standalone SVG document.
    pub fn render_to_svg_string(&self, opts: &RenderOptions) -> String {
        let dims = opts.dimensions;
        let layout = GridLayout::plan(self.panels.len(), &dims);

        let mut svg = SvgWriter::new();
        svg.open(
            "svg",
            &[
                ("xmlns", "http://www.w3.org/2000/svg"),
                ("width", &layout.canvas_width.to_string()),
                ("height", &layout.canvas_height.to_string()),
            ],
        );

        let styles: Vec<SeriesStyle> = self.panels.iter().map(|p| p.style.clone()).collect();
        gradient::write_defs(&mut svg, &styles);

        for (panel, slot) in self.panels.iter().zip(&layout.slots) {
            svg.open(
                "g",
                &[(
                    "transform",
                    &format!("translate({},{})", slot.translate_x, slot.translate_y),
                )],
            );
            draw_panel(&mut svg, panel, &dims, opts);
            svg.close("g");
        }

        svg.close("svg");
        svg.finish()
    }

    /// Render and write the document, creating parent directories as needed.
    pub fn render_to_svg(
        &self,
        opts: &RenderOptions,
        output_path: impl AsRef<Path>,
    ) -> Result<(), ChartError> {
        let doc = self.render_to_svg_string(opts);
        if let Some(parent) = output_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_path, doc)?;
        Ok(())
    }
}

/// Scales for one panel: years across the bounded width, values down from
/// zero at the bottom edge.
pub fn panel_scales(series: &HazardSeries, dims: &Dimensions) -> (TimeScale, LinearScale) {
    let x_scale = TimeScale::new(series.year_extent(), dims.bounded_width as f64);
    let y_scale = LinearScale::new(series.max_value(), dims.bounded_height as f64);
    (x_scale, y_scale)
}

// ---- helpers ----------------------------------------------------------------

fn draw_panel(svg: &mut SvgWriter, panel: &Panel, dims: &Dimensions, opts: &RenderOptions) {
    let (x_scale, y_scale) = panel_scales(&panel.series, dims);

    let points: Vec<(f64, f64)> = panel
        .series
        .records()
        .iter()
        .map(|r| (x_scale.to_px(r.year), y_scale.to_px(r.value)))
        .collect();

    let line_d = opts.curve.emit(&points);
    let baseline_y = y_scale.to_px(0.0);
    let first_x = points[0].0;
    let last_x = points[points.len() - 1].0;
    let area_d = area_path(&line_d, first_x, last_x, baseline_y);

    svg.leaf("path", &[("d", &area_d), ("fill", &panel.style.fill_url())]);
    svg.leaf(
        "path",
        &[
            ("d", &line_d),
            ("stroke", panel.style.stroke_color.as_str()),
            ("stroke-opacity", "1"),
            ("stroke-width", "1"),
            ("fill", "none"),
        ],
    );

    BottomAxis::default().render(svg, &x_scale, dims.bounded_height as f64);

    svg.text_element(
        "text",
        &[("class", "title"), ("x", "-5"), ("y", "-30")],
        panel.series.title(),
    );

    if opts.interactive {
        draw_hover_scaffolding(svg, panel, dims);
    }
}

/// Hidden marker circle, empty value label, and a full-size transparent
/// overlay that embeddings attach pointer handlers to. Both indicator
/// elements start at opacity 0 and are toggled to 1 on hover.
fn draw_hover_scaffolding(svg: &mut SvgWriter, panel: &Panel, dims: &Dimensions) {
    svg.leaf(
        "circle",
        &[
            ("class", "marker"),
            ("r", &fmt_px(MARKER_RADIUS)),
            ("stroke", panel.style.stroke_color.as_str()),
            ("fill", "none"),
            ("opacity", "0"),
        ],
    );
    svg.text_element("text", &[("class", "tooltip"), ("opacity", "0")], "");
    svg.leaf(
        "rect",
        &[
            ("class", "overlay"),
            ("width", &dims.bounded_width.to_string()),
            ("height", &dims.bounded_height.to_string()),
            ("fill", "transparent"),
            ("pointer-events", "all"),
        ],
    );
}
