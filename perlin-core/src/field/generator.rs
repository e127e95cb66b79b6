//! Sequential and parallel field evaluation.
//!
//! Each sample depends only on its grid index and the spec, so both paths
//! fill the same buffer with bit-identical values.

use std::time::Instant;

use perlin_utils::noise::NoiseError;
use rayon::prelude::*;

use super::{FieldError, FieldSpec, NoiseField};

/// Fill the `y, z` plane at grid index `x`.
fn fill_plane(spec: &FieldSpec, x: usize, plane: &mut [f64]) -> Result<(), NoiseError> {
    let fx = spec.coord(x, spec.width);
    for (y, row) in plane.chunks_mut(spec.depth).enumerate() {
        let fy = spec.coord(y, spec.height);
        for (z, value) in row.iter_mut().enumerate() {
            *value = spec.octaves.sample(fx, fy, spec.coord(z, spec.depth))?;
        }
    }
    Ok(())
}

/// Generate a field on the calling thread.
#[tracing::instrument(level = "debug", skip_all, fields(width = spec.width, height = spec.height, depth = spec.depth))]
pub fn generate(spec: &FieldSpec) -> Result<NoiseField, FieldError> {
    let len = spec.validate()?;
    let start = Instant::now();

    let mut values = vec![0.0; len];
    values
        .chunks_mut(spec.height * spec.depth)
        .enumerate()
        .try_for_each(|(x, plane)| fill_plane(spec, x, plane))?;

    log::debug!("Generated {len} samples sequentially in {:?}", start.elapsed());
    Ok(NoiseField::from_values(
        spec.width,
        spec.height,
        spec.depth,
        values,
    ))
}

/// Generate a field on the current rayon thread pool, one x-plane per task.
#[tracing::instrument(level = "debug", skip_all, fields(width = spec.width, height = spec.height, depth = spec.depth))]
pub fn generate_parallel(spec: &FieldSpec) -> Result<NoiseField, FieldError> {
    let len = spec.validate()?;
    let start = Instant::now();

    let mut values = vec![0.0; len];
    values
        .par_chunks_mut(spec.height * spec.depth)
        .enumerate()
        .try_for_each(|(x, plane)| fill_plane(spec, x, plane))?;

    log::debug!(
        "Generated {len} samples on {} threads in {:?}",
        rayon::current_num_threads(),
        start.elapsed()
    );
    Ok(NoiseField::from_values(
        spec.width,
        spec.height,
        spec.depth,
        values,
    ))
}
