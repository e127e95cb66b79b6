//! Deterministic improved Perlin noise.
//!
//! [`noise`] holds the sampling pipeline: the fixed permutation table, the
//! corner-hash resolver, the gradient function and the single- and multi-octave
//! evaluators. [`math`] holds the scalar primitives they are built from.

pub mod math;
pub mod noise;
