//! Dense 3D noise fields.
//!
//! - [`FieldSpec`] - Grid dimensions, coordinate scale and octave parameters
//! - [`NoiseField`] - The sampled values, stored x-major
//! - [`generate`] / [`generate_parallel`] - Produce a field; both yield identical values

mod field_spec;
mod generator;
mod noise_field;

pub use field_spec::{FieldError, FieldSpec};
pub use generator::{generate, generate_parallel};
pub use noise_field::{FieldStats, NoiseField};
