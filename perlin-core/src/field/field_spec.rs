//! Description of a field to sample.

use perlin_utils::noise::{NoiseError, OctaveParams};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error that can occur while generating a field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// One of the grid dimensions is zero.
    #[error("field {axis} must be non-zero")]
    EmptyDimension {
        /// Name of the offending dimension.
        axis: &'static str,
    },
    /// The grid has more cells than can be addressed.
    #[error("field of {width}x{height}x{depth} samples is too large")]
    TooLarge {
        /// Samples along x.
        width: usize,
        /// Samples along y.
        height: usize,
        /// Samples along z.
        depth: usize,
    },
    /// The octave parameters were rejected.
    #[error(transparent)]
    Noise(#[from] NoiseError),
}

/// A grid of sample positions and the noise evaluated at them.
///
/// Grid index `(x, y, z)` samples at
/// `(x / width * scale, y / height * scale, z / depth * scale)`, so a scale of
/// `1.0` covers one lattice cell per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSpec {
    /// Samples along x.
    pub width: usize,
    /// Samples along y.
    pub height: usize,
    /// Samples along z.
    pub depth: usize,
    /// Extent of the sampled region in noise space, per axis.
    pub scale: f64,
    /// Octave parameters used for every sample.
    pub octaves: OctaveParams,
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            depth: 64,
            scale: 1.0,
            octaves: OctaveParams::default(),
        }
    }
}

impl FieldSpec {
    /// Create a cube-shaped spec with unit scale.
    #[must_use]
    pub const fn cube(side: usize, octaves: OctaveParams) -> Self {
        Self {
            width: side,
            height: side,
            depth: side,
            scale: 1.0,
            octaves,
        }
    }

    /// Check the spec and return the total number of samples.
    pub fn validate(&self) -> Result<usize, FieldError> {
        for (axis, len) in [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
        ] {
            if len == 0 {
                return Err(FieldError::EmptyDimension { axis });
            }
        }
        self.octaves.validate()?;

        self.width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(self.depth))
            .ok_or(FieldError::TooLarge {
                width: self.width,
                height: self.height,
                depth: self.depth,
            })
    }

    /// Noise-space coordinate of grid index `i` along an axis of `len` samples.
    #[inline]
    pub(crate) fn coord(&self, i: usize, len: usize) -> f64 {
        i as f64 / len as f64 * self.scale
    }
}
