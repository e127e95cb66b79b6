//! Field generation on top of `perlin-utils`.
//!
//! Arranges grid coordinates, evaluates fractal noise for each one and collects
//! the results into a [`field::NoiseField`], sequentially or across the rayon
//! thread pool.

pub mod field;
