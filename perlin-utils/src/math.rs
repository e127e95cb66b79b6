//! Scalar helpers shared by the noise evaluators.

/// Perlin's quintic smoothing curve, `6t^5 - 15t^4 + 10t^3`.
///
/// The raw polynomial is returned for `t` outside `[0, 1]`; no clamping is applied.
#[inline]
#[must_use]
pub const fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation from `v0` to `v1`. `alpha` is not clamped.
#[inline]
#[must_use]
pub const fn lerp(v0: f64, v1: f64, alpha: f64) -> f64 {
    v0 + alpha * (v1 - v0)
}

/// Trilinear interpolation over the eight corners of a unit cell.
///
/// `corners` is ordered with x varying fastest, then y, then z:
/// `[000, 100, 010, 110, 001, 101, 011, 111]`. Interpolates along x with `u`,
/// then along y with `v`, then along z with `w`.
#[inline]
#[must_use]
pub const fn lerp3(u: f64, v: f64, w: f64, corners: &[f64; 8]) -> f64 {
    let near = lerp(
        lerp(corners[0], corners[1], u),
        lerp(corners[2], corners[3], u),
        v,
    );
    let far = lerp(
        lerp(corners[4], corners[5], u),
        lerp(corners[6], corners[7], u),
        v,
    );
    lerp(near, far, w)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    #[test]
    #[allow(clippy::float_cmp, reason = "samples are compared for exact equality")]
    fn test_fade_endpoints() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
    }

    #[test]
    fn test_fade_reference_values() {
        let cases = [
            (1.5, 3.375),
            (0.75, 0.896_484_4),
            (1.05, 1.001_346),
            (-1.5, -155.25),
            (0.4, 0.317_44),
        ];
        for (t, expected) in cases {
            let got = fade(t);
            assert!(
                (got - expected).abs() <= TOLERANCE,
                "fade({t}) = {got}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_fade_monotonic_on_unit_interval() {
        let mut previous = fade(0.0);
        for i in 1..=100 {
            let current = fade(f64::from(i) / 100.0);
            assert!(current > previous, "fade not increasing at step {i}");
            previous = current;
        }
    }

    #[test]
    fn test_fade_flat_at_endpoints() {
        let h = 1e-4;
        let slope_at_zero = (fade(h) - fade(0.0)) / h;
        let slope_at_one = (fade(1.0) - fade(1.0 - h)) / h;
        assert!(slope_at_zero.abs() < 1e-6, "slope at 0 is {slope_at_zero}");
        assert!(slope_at_one.abs() < 1e-6, "slope at 1 is {slope_at_one}");

        let h = 1e-3;
        let curvature_at_zero = (fade(h) - 2.0 * fade(0.0) + fade(-h)) / (h * h);
        let curvature_at_one = (fade(1.0 + h) - 2.0 * fade(1.0) + fade(1.0 - h)) / (h * h);
        assert!(curvature_at_zero.abs() < 1e-3, "curvature at 0 is {curvature_at_zero}");
        assert!(curvature_at_one.abs() < 1e-3, "curvature at 1 is {curvature_at_one}");
    }

    #[test]
    #[allow(clippy::float_cmp, reason = "alpha 0 must return the start value exactly")]
    fn test_lerp_alpha_zero_is_start() {
        for (v0, v1) in [(-4.2, 7.0), (0.0, 1.0), (0.123, -0.5), (1e3, 0.975)] {
            assert_eq!(lerp(v0, v1, 0.0), v0);
        }
    }

    #[test]
    fn test_lerp_alpha_one_is_end() {
        for v0 in [-4.2, 0.0, 0.123, 3.5, 1e3] {
            let got = lerp(v0, 0.975, 1.0);
            assert!((got - 0.975).abs() <= TOLERANCE, "lerp({v0}, 0.975, 1) = {got}");
        }
    }

    #[test]
    fn test_lerp_matches_formula() {
        // Spread over [-5, 5) including alpha outside [0, 1].
        for i in 0..25 {
            let i = f64::from(i);
            let v0 = (i * 0.37).sin() * 5.0;
            let v1 = (i * 1.91).cos() * 5.0;
            let alpha = (i * 0.73).sin() * 5.0;
            let expected = v0 + alpha * (v1 - v0);
            assert!((lerp(v0, v1, alpha) - expected).abs() <= TOLERANCE);
        }
    }

    #[test]
    #[allow(clippy::float_cmp, reason = "samples are compared for exact equality")]
    fn test_lerp3_corners() {
        let corners = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        assert_eq!(lerp3(0.0, 0.0, 0.0, &corners), 1.0);
        assert_eq!(lerp3(1.0, 0.0, 0.0, &corners), 2.0);
        assert_eq!(lerp3(0.0, 1.0, 0.0, &corners), 3.0);
        assert_eq!(lerp3(0.0, 0.0, 1.0, &corners), 5.0);
        assert_eq!(lerp3(1.0, 1.0, 1.0, &corners), 8.0);
        assert_eq!(lerp3(0.5, 0.5, 0.5, &corners), 4.5);
    }
}
