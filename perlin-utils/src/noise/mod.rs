//! Improved Perlin noise (Perlin 2002) and its fractal sum.
//!
//! - [`PERMUTATION`] - Fixed reference permutation, doubled to 512 entries
//! - [`resolve_hashes`] - Corner hashes of a lattice cell
//! - [`grad`] - Gradient projection selected by a hash nibble
//! - [`perlin`] - Single-octave noise
//! - [`octave_perlin`] - Normalized multi-octave (fBm) noise

mod gradient;
mod improved_noise;
mod octave_noise;
mod permutation;

pub use gradient::grad;
pub use improved_noise::perlin;
pub use octave_noise::{NoiseError, OctaveParams, octave_perlin};
pub use permutation::{CornerHashes, PERMUTATION, resolve_hashes};
