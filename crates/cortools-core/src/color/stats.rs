// crates/cortools-core/src/color/stats.rs

use std::fmt;

use crate::error::{CorError, Result};
use crate::grid::Displacement;

/// Range statistics of a displacement field.
/// Zero axis ranges read as 1 and a zero magnitude spread gives `dist_scale = 1.0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridStats {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
    pub range_x: i64,
    pub range_y: i64,
    /// `255 / range_x`; informational.
    pub x_scale: f64,
    /// `255 / range_y`; informational.
    pub y_scale: f64,
    pub min_magnitude: f64,
    pub max_magnitude: f64,
    pub dist_scale: f64,
}

impl GridStats {
    pub fn compute(cells: &[Displacement]) -> Result<Self> {
        let first = cells.first().ok_or(CorError::NoSamples)?;

        let (mut min_x, mut max_x) = (first.dx, first.dx);
        let (mut min_y, mut max_y) = (first.dy, first.dy);
        let mut min_magnitude = f64::INFINITY;
        let mut max_magnitude = f64::NEG_INFINITY;

        for d in cells {
            min_x = min_x.min(d.dx);
            max_x = max_x.max(d.dx);
            min_y = min_y.min(d.dy);
            max_y = max_y.max(d.dy);

            let m = d.magnitude();
            min_magnitude = min_magnitude.min(m);
            max_magnitude = max_magnitude.max(m);
        }

        let range_x = nonzero_range(max_x - min_x);
        let range_y = nonzero_range(max_y - min_y);

        let spread = max_magnitude - min_magnitude;
        let dist_scale = if spread == 0.0 { 1.0 } else { 1.0 / spread };

        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
            range_x,
            range_y,
            x_scale: 255.0 / range_x as f64,
            y_scale: 255.0 / range_y as f64,
            min_magnitude,
            max_magnitude,
            dist_scale,
        })
    }

    /// Magnitude of `d` mapped onto [0, 1] across the field.
    pub fn saturation(&self, d: &Displacement) -> f64 {
        (d.magnitude() - self.min_magnitude) * self.dist_scale
    }
}

fn nonzero_range(r: i64) -> i64 {
    if r == 0 {
        1
    } else {
        r
    }
}

impl fmt::Display for GridStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min-x,y: {} {}. max x,y: {} {}. range-xy={},{} sxy: {:.6},{:.6}",
            self.min_x,
            self.min_y,
            self.max_x,
            self.max_y,
            self.range_x,
            self.range_y,
            self.x_scale,
            self.y_scale
        )
    }
}
