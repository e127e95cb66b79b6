//! Storage for sampled fields.

/// Sampled noise values on a `width x height x depth` grid.
///
/// Values are stored x-major: `index = (x * height + y) * depth + z`.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseField {
    width: usize,
    height: usize,
    depth: usize,
    values: Vec<f64>,
}

/// Summary of the values in a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStats {
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
    /// Arithmetic mean of all samples.
    pub mean: f64,
}

impl NoiseField {
    pub(crate) const fn from_values(
        width: usize,
        height: usize,
        depth: usize,
        values: Vec<f64>,
    ) -> Self {
        Self {
            width,
            height,
            depth,
            values,
        }
    }

    /// `(width, height, depth)` of the grid.
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.depth)
    }

    /// All samples in storage order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the field holds no samples.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The sample at grid index `(x, y, z)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<f64> {
        if x >= self.width || y >= self.height || z >= self.depth {
            return None;
        }
        self.values
            .get((x * self.height + y) * self.depth + z)
            .copied()
    }

    /// Minimum, maximum and mean of the samples, or `None` for an empty field.
    #[must_use]
    pub fn stats(&self) -> Option<FieldStats> {
        if self.values.is_empty() {
            return None;
        }
        let min = self.values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = self.values.iter().sum::<f64>() / self.values.len() as f64;
        Some(FieldStats { min, max, mean })
    }
}
