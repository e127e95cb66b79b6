//! Single-octave improved Perlin noise.

#![allow(
    clippy::many_single_char_names,
    reason = "coordinates and hashes use their mathematical names"
)]

use crate::math::{fade, lerp3};

use super::{grad, resolve_hashes};

/// Split a coordinate into its wrapped lattice index and relative offset.
///
/// The integer part is truncated toward zero, so the offset of a negative
/// non-integral coordinate lies in `(-1, 0)`. The index wraps with period 256.
#[inline]
fn lattice(coord: f64) -> (u8, f64) {
    let whole = coord.trunc();
    ((whole as i64 & 0xFF) as u8, coord - whole)
}

/// Sample 3D improved Perlin noise at the given coordinates.
///
/// Returns a value nominally in `[-1, 1]`; no clamping is applied, and
/// negative coordinates can leave that range. Every lattice point samples to
/// exactly `0.0`.
#[must_use]
pub fn perlin(x: f64, y: f64, z: f64) -> f64 {
    let (xi, x) = lattice(x);
    let (yi, y) = lattice(y);
    let (zi, z) = lattice(z);

    let h = resolve_hashes(xi, yi, zi);

    let corners = [
        grad(h.aaa, x, y, z),
        grad(h.baa, x - 1.0, y, z),
        grad(h.aba, x, y - 1.0, z),
        grad(h.bba, x - 1.0, y - 1.0, z),
        grad(h.aab, x, y, z - 1.0),
        grad(h.bab, x - 1.0, y, z - 1.0),
        grad(h.abb, x, y - 1.0, z - 1.0),
        grad(h.bbb, x - 1.0, y - 1.0, z - 1.0),
    ];

    lerp3(fade(x), fade(y), fade(z), &corners)
}
