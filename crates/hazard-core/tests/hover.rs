// File: crates/hazard-core/tests/hover.rs
// Purpose: Validate pointer-to-record bisection and its clamping policy.

use chrono::NaiveDate;
use hazard_core::chart::panel_scales;
use hazard_core::hover::bisect_left;
use hazard_core::{Dimensions, HazardRecord, HazardSeries, HoverResolver};

fn year(y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, 1, 1).unwrap()
}

fn series() -> HazardSeries {
    HazardSeries::new(
        "hover",
        vec![
            HazardRecord::new(year(2000), 10.0),
            HazardRecord::new(year(2010), 30.0),
            HazardRecord::new(year(2020), 5.0),
        ],
    )
    .unwrap()
}

#[test]
fn bisect_left_is_left_insertion() {
    let years = [year(2000), year(2010), year(2020)];
    assert_eq!(bisect_left(&years, year(1990)), 0);
    assert_eq!(bisect_left(&years, year(2000)), 0);
    assert_eq!(bisect_left(&years, year(2005)), 1);
    assert_eq!(bisect_left(&years, year(2010)), 1);
    assert_eq!(bisect_left(&years, year(2030)), 3);
}

#[test]
fn pointer_at_record_x_resolves_to_that_record() {
    let s = series();
    let dims = Dimensions::default();
    let (x_scale, y_scale) = panel_scales(&s, &dims);
    let resolver = HoverResolver::new(&s, x_scale, y_scale);

    for (i, record) in s.records().iter().enumerate() {
        let hit = resolver.resolve(x_scale.to_px(record.year));
        assert_eq!(hit.index, i);
        assert_eq!(hit.year, record.year);
        assert_eq!(hit.value, record.value);
        assert_eq!(hit.y_px, y_scale.to_px(record.value));
    }
}

#[test]
fn pointer_before_first_clamps_to_first() {
    let s = series();
    let dims = Dimensions::default();
    let (x_scale, y_scale) = panel_scales(&s, &dims);
    let resolver = HoverResolver::new(&s, x_scale, y_scale);

    let hit = resolver.resolve(-25.0);
    assert_eq!(hit.index, 0);
    assert_eq!(hit.year, year(2000));
}

#[test]
fn pointer_past_last_clamps_to_last() {
    let s = series();
    let dims = Dimensions::default();
    let (x_scale, y_scale) = panel_scales(&s, &dims);
    let resolver = HoverResolver::new(&s, x_scale, y_scale);

    let hit = resolver.resolve(dims.bounded_width as f64 + 500.0);
    assert_eq!(hit.index, s.len() - 1);
    assert_eq!(hit.year, year(2020));
    assert_eq!(hit.value, 5.0);
}

#[test]
fn interior_pointer_takes_the_left_insertion_candidate() {
    let s = series();
    let dims = Dimensions::default();
    let (x_scale, y_scale) = panel_scales(&s, &dims);
    let resolver = HoverResolver::new(&s, x_scale, y_scale);

    // Halfway between the first two records: the left insertion point of the
    // inverted date is the second record, not the visually nearest one.
    let px = x_scale.to_px(year(2005));
    let hit = resolver.resolve(px);
    assert_eq!(hit.index, 1);
    assert_eq!(hit.year, year(2010));
}
