// File: crates/hazard-core/src/layout.rs
// Summary: Fixed 2-column grid placement of panels on one shared canvas.

use crate::types::{Dimensions, PANEL_GUTTER};

/// Number of panel columns; the dashboard is always laid out two across.
pub const COLUMNS: u32 = 2;

/// Placement of one panel: grid cell plus the translate offset of its
/// bounded drawing group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelSlot {
    pub col: u32,
    pub row: u32,
    pub translate_x: u32,
    pub translate_y: u32,
}

/// Canvas size and per-panel offsets for `panel_count` panels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridLayout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub slots: Vec<PanelSlot>,
}

impl GridLayout {
    /// Plan a grid of `panel_count` panels in row-major order. Each bounded
    /// group is shifted 20 px below its margin origin so titles clear the
    /// panel above.
    pub fn plan(panel_count: usize, dims: &Dimensions) -> Self {
        let rows = (panel_count as u32).div_ceil(COLUMNS).max(1);
        let slots = (0..panel_count as u32)
            .map(|i| {
                let col = i % COLUMNS;
                let row = i / COLUMNS;
                PanelSlot {
                    col,
                    row,
                    translate_x: col * (dims.width + PANEL_GUTTER) + dims.margin.left,
                    translate_y: row * (dims.height + PANEL_GUTTER) + dims.margin.top + 20,
                }
            })
            .collect();
        Self {
            canvas_width: COLUMNS * dims.width + (COLUMNS - 1) * PANEL_GUTTER,
            canvas_height: rows * dims.height + (rows - 1) * PANEL_GUTTER,
            slots,
        }
    }
}
