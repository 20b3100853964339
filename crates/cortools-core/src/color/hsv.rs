// crates/cortools-core/src/color/hsv.rs

/// Linear RGB in [0, 1].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorSample {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl ColorSample {
    /// Build a sample with every channel passed through [`clamp_channel`].
    pub fn clamped(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

/// Absolute value, capped at 1.0. Out-of-range negatives are mirrored, not wrapped.
pub fn clamp_channel(c: f64) -> f64 {
    let a = c.abs();
    if a > 1.0 {
        1.0
    } else {
        a
    }
}

/// Standard six-sector HSV to RGB. Hue is taken modulo one turn, so negative
/// hues are accepted.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let h6 = h.rem_euclid(1.0) * 6.0;
    let i = h6.floor();
    let f = h6 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
