//! Fractal (multi-octave) summation of improved noise.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::perlin;

/// An error raised by the octave combiner.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseError {
    /// Fewer than one octave was requested.
    #[error("octave count must be at least 1, got {octaves}")]
    InvalidOctaves {
        /// The rejected octave count.
        octaves: i32,
    },
}

/// Sample normalized fractal noise.
///
/// Octave `i` samples [`perlin`] at the coordinates scaled by
/// `frequency_multiplier^i` and weights the result by `persistence^i`. The
/// weighted sum is divided by the total weight.
///
/// Persistence and frequency multiplier are taken as given; degenerate values
/// produce degenerate (possibly non-finite) results.
pub fn octave_perlin(
    x: f64,
    y: f64,
    z: f64,
    persistence: f64,
    frequency_multiplier: f64,
    octaves: i32,
) -> Result<f64, NoiseError> {
    if octaves < 1 {
        return Err(NoiseError::InvalidOctaves { octaves });
    }

    let mut total = 0.0;
    let mut total_amplitude = 0.0;
    for i in 0..octaves {
        let frequency = frequency_multiplier.powi(i);
        let amplitude = persistence.powi(i);
        total += amplitude * perlin(x * frequency, y * frequency, z * frequency);
        total_amplitude += amplitude;
    }

    Ok(total / total_amplitude)
}

/// Parameters of the fractal sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OctaveParams {
    /// Amplitude decay per octave.
    pub persistence: f64,
    /// Frequency growth per octave.
    pub frequency_multiplier: f64,
    /// Number of octaves to sum; must be at least 1.
    pub octaves: i32,
}

impl Default for OctaveParams {
    fn default() -> Self {
        Self {
            persistence: 0.5,
            frequency_multiplier: 2.0,
            octaves: 6,
        }
    }
}

impl OctaveParams {
    /// Create a new set of octave parameters.
    #[must_use]
    pub const fn new(persistence: f64, frequency_multiplier: f64, octaves: i32) -> Self {
        Self {
            persistence,
            frequency_multiplier,
            octaves,
        }
    }

    /// Check the octave count without sampling anything.
    pub const fn validate(&self) -> Result<(), NoiseError> {
        if self.octaves < 1 {
            return Err(NoiseError::InvalidOctaves {
                octaves: self.octaves,
            });
        }
        Ok(())
    }

    /// Sample fractal noise with these parameters.
    pub fn sample(&self, x: f64, y: f64, z: f64) -> Result<f64, NoiseError> {
        octave_perlin(
            x,
            y,
            z,
            self.persistence,
            self.frequency_multiplier,
            self.octaves,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_unit_octave_is_perlin() {
        for i in -8..8 {
            let x = f64::from(i) * 0.731;
            let y = f64::from(i) * -1.19;
            let z = f64::from(i) * 0.057 + 0.3;
            assert_eq!(
                octave_perlin(x, y, z, 1.0, 1.0, 1),
                Ok(perlin(x, y, z))
            );
        }
    }

    #[test]
    fn test_rejects_non_positive_octaves() {
        for octaves in [0, -1, i32::MIN] {
            assert_eq!(
                octave_perlin(0.1, 0.2, 0.3, 0.5, 2.0, octaves),
                Err(NoiseError::InvalidOctaves { octaves })
            );
        }
    }

    #[test]
    fn test_error_message() {
        let err = NoiseError::InvalidOctaves { octaves: 0 };
        assert_eq!(err.to_string(), "octave count must be at least 1, got 0");
    }

    #[test]
    fn test_reference_sums() {
        let cases = [
            ((0.1, -0.1, 0.7, 0.5, 2.0, 4), 0.620_333_978_639_291_4),
            ((0.3, 0.6, 0.9, 1.25, 2.0, 6), 0.101_250_216_033_757_6),
        ];
        for ((x, y, z, p, f, o), expected) in cases {
            let got = octave_perlin(x, y, z, p, f, o).expect("valid octave count");
            assert!(
                (got - expected).abs() < 1e-9,
                "octave_perlin({x}, {y}, {z}, {p}, {f}, {o}) = {got}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_unit_persistence_is_plain_mean() {
        let (x, y, z) = (0.21, 0.43, 0.65);
        let mean = (0..3)
            .map(|i| {
                let f = 2.0_f64.powi(i);
                perlin(x * f, y * f, z * f)
            })
            .sum::<f64>()
            / 3.0;
        let got = octave_perlin(x, y, z, 1.0, 2.0, 3).expect("valid octave count");
        assert!((got - mean).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_parameters_are_not_clamped() {
        // Zero persistence leaves only the first octave.
        let got = octave_perlin(0.1, -0.1, 0.7, 0.0, 2.0, 5).expect("valid octave count");
        assert!((got - perlin(0.1, -0.1, 0.7)).abs() < 1e-12);

        // Persistence -1 cancels the total amplitude over an even octave count.
        let got = octave_perlin(0.1, 0.2, 0.3, -1.0, 2.0, 2).expect("valid octave count");
        assert!(!got.is_finite());
    }

    #[test]
    fn test_params_sample_and_validate() {
        let params = OctaveParams::new(0.5, 2.0, 4);
        assert_eq!(params.validate(), Ok(()));
        assert_eq!(
            params.sample(0.1, -0.1, 0.7),
            octave_perlin(0.1, -0.1, 0.7, 0.5, 2.0, 4)
        );

        let params = OctaveParams {
            octaves: 0,
            ..OctaveParams::default()
        };
        assert_eq!(
            params.validate(),
            Err(NoiseError::InvalidOctaves { octaves: 0 })
        );
        assert!(params.sample(0.1, 0.2, 0.3).is_err());
    }

    #[test]
    fn test_params_deserialize_with_defaults() {
        let params: OctaveParams =
            serde_json5::from_str("{ octaves: 3 }").expect("valid json5");
        assert_eq!(params, OctaveParams::new(0.5, 2.0, 3));
    }
}
