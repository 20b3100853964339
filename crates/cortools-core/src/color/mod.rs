// crates/cortools-core/src/color/mod.rs
//
// Per-cell colors for a displacement field: hue follows direction, saturation
// follows magnitude relative to the field's spread, value is fixed.

pub mod hsv;
pub mod stats;

pub use hsv::{clamp_channel, hsv_to_rgb, ColorSample};
pub use stats::GridStats;

use std::f64::consts::TAU;

use crate::error::Result;
use crate::grid::Displacement;

/// Brightness used for every cell.
pub const CELL_VALUE: f64 = 0.5;

/// Statistics plus one color per input cell, in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorMap {
    pub stats: GridStats,
    pub colors: Vec<ColorSample>,
}

/// Direction of a displacement as a fraction of a turn, in [-0.5, 0.5].
pub fn hue(d: &Displacement) -> f64 {
    (d.dy as f64).atan2(d.dx as f64) / TAU
}

pub fn colorize(cells: &[Displacement]) -> Result<ColorMap> {
    let stats = GridStats::compute(cells)?;
    let colors = cells
        .iter()
        .map(|d| {
            let (r, g, b) = hsv_to_rgb(hue(d), stats.saturation(d), CELL_VALUE);
            ColorSample::clamped(r, g, b)
        })
        .collect();
    Ok(ColorMap { stats, colors })
}
