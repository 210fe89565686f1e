//! Dense per-pixel scalar fields and the builders that synthesize them
//!
//! The source field holds intensities in `[0, 255]`; the mask field holds
//! attenuation factors in `[0, 1]`. Both are produced fresh for every render
//! and are read-only afterwards.

/// Directional gradient synthesis
pub mod gradient;
/// Soft spatial attenuation mask
pub mod mask;
/// Fractal, ridged and domain-warped noise synthesis
pub mod noise;
/// Source mode dispatch and noise/gradient blending
pub mod source;

use crate::params::Parameters;
use ndarray::Array2;

/// Row-major scalar field covering the whole canvas
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityField {
    values: Array2<f32>,
}

impl IntensityField {
    /// Build a field by evaluating `f(x, y)` for every pixel
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        Self {
            values: Array2::from_shape_fn((height, width), |(y, x)| f(x, y)),
        }
    }

    /// Wrap an array indexed by `(row, col)`
    pub fn from_array(values: Array2<f32>) -> Self {
        Self {
            values: values.as_standard_layout().into_owned(),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.values.ncols()
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.values.nrows()
    }

    /// Value at a pixel, `None` outside the canvas
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        self.values.get((y, x)).copied()
    }

    /// Value at a row-major pixel index, zero outside the canvas
    pub fn at_index(&self, index: usize) -> f32 {
        self.as_slice().get(index).copied().unwrap_or(0.0)
    }

    /// All values in row-major order
    pub fn as_slice(&self) -> &[f32] {
        self.values.as_slice().unwrap_or(&[])
    }

    /// Underlying array indexed by `(row, col)`
    pub const fn values(&self) -> &Array2<f32> {
        &self.values
    }
}

/// Everything a rasterizer or vector extractor reads
#[derive(Debug, Clone)]
pub struct Fields {
    /// Source intensities in `[0, 255]`
    pub source: IntensityField,
    /// Attenuation in `[0, 1]`, present only when masking is enabled
    pub mask: Option<IntensityField>,
}

impl Fields {
    /// Build the source field and, if enabled, the mask field
    pub fn build(width: usize, height: usize, params: &Parameters) -> Self {
        let source = source::build_source_field(width, height, params);
        let mask = params
            .mask
            .enabled
            .then(|| mask::build_mask_field(width, height, params.noise.seed, &params.mask));

        Self { source, mask }
    }

    /// Brightness in `[0, 1]` at a row-major pixel index
    pub fn brightness(&self, index: usize) -> f64 {
        f64::from(self.source.at_index(index)) / 255.0
    }

    /// Mask factor at a row-major pixel index, 1 when masking is off
    pub fn mask_factor(&self, index: usize) -> f64 {
        self.mask
            .as_ref()
            .map_or(1.0, |mask| f64::from(mask.at_index(index)))
    }
}
