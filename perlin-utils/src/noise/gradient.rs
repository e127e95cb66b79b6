//! Gradient selection for improved noise.

/// Dot product of `(x, y, z)` with the gradient picked by the low nibble of `hash`.
///
/// The sixteen nibbles cover the twelve cube-edge directions, with
/// `(1, 1, 0)`, `(-1, 1, 0)`, `(0, -1, 1)` and `(0, -1, -1)` repeated to fill
/// the table.
#[inline]
#[must_use]
pub const fn grad(hash: u8, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}
