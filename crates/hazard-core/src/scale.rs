// File: crates/hazard-core/src/scale.rs
// Summary: Time (X) and linear value (Y) scale transforms between data and pixel space.

use chrono::NaiveDate;

/// Horizontal time scale mapping `[d0, d1]` onto `[0, range_px]`.
/// Degenerate domains (single date) are widened by one day so the transform
/// stays finite.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    d0: NaiveDate,
    d1: NaiveDate,
    range_px: f64,
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range_px: f64) -> Self {
        let (d0, mut d1) = domain;
        if d1 <= d0 {
            d1 = d0 + chrono::Days::new(1);
        }
        Self { d0, d1, range_px }
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) {
        (self.d0, self.d1)
    }

    #[inline]
    fn span_days(&self) -> f64 {
        (self.d1 - self.d0).num_days() as f64
    }

    #[inline]
    pub fn to_px(&self, d: NaiveDate) -> f64 {
        (d - self.d0).num_days() as f64 / self.span_days() * self.range_px
    }

    /// Inverse transform: pixel offset back to a date, rounded to whole days.
    /// Input outside `[0, range_px]` extrapolates; hover resolution clamps on
    /// the index side instead.
    #[inline]
    pub fn from_px(&self, px: f64) -> NaiveDate {
        let days = (px / self.range_px.max(1e-9) * self.span_days()).round() as i64;
        self.d0 + chrono::Duration::days(days)
    }
}

/// Vertical linear scale mapping `[0, vmax]` onto `[range_px, 0]`.
/// The inversion matches SVG coordinates: value 0 sits at the bottom edge.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    vmax: f64,
    range_px: f64,
}

impl LinearScale {
    pub fn new(vmax: f64, range_px: f64) -> Self {
        // Guard all-zero series against a zero-width domain.
        Self { vmax: if vmax.abs() < 1e-12 { 1.0 } else { vmax }, range_px }
    }

    pub fn domain(&self) -> (f64, f64) {
        (0.0, self.vmax)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.range_px - v / self.vmax * self.range_px
    }

    #[inline]
    pub fn from_px(&self, py: f64) -> f64 {
        (self.range_px - py) / self.range_px.max(1e-9) * self.vmax
    }
}
