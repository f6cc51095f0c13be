// File: crates/hazard-core/src/grid.rs
// Summary: Tick layout helpers (linspace, nice year steps).

/// Evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Smallest step from the 1/2/5 decade ladder that covers `span` years with
/// at most `count` ticks.
pub fn nice_year_step(span: i32, count: usize) -> i32 {
    let count = count.max(1) as i32;
    let raw = (span.max(1) as f64 / count as f64).max(1.0);
    let mag = 10f64.powf(raw.log10().floor());
    for m in [1.0, 2.0, 5.0, 10.0] {
        let step = m * mag;
        if step >= raw {
            return step.round() as i32;
        }
    }
    (10.0 * mag).round() as i32
}

/// Years divisible by `step` inside `[y0, y1]` inclusive.
pub fn year_ticks(y0: i32, y1: i32, step: i32) -> Vec<i32> {
    let step = step.max(1);
    let first = y0.div_euclid(step) * step + if y0.rem_euclid(step) == 0 { 0 } else { step };
    (0..)
        .map(|i| first + i * step)
        .take_while(|&y| y <= y1)
        .collect()
}
