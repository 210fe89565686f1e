//! Soft spatial mask
//!
//! A two-octave noise blend shaped by a vertical falloff and an edge fade,
//! then squeezed through a smoothstep band. The mask noise is seeded at a fixed
//! offset from the base seed so it never mirrors the source pattern.

use crate::field::IntensityField;
use crate::io::configuration::{
    MASK_DETAIL_FREQUENCY, MASK_DETAIL_WEIGHT, MASK_PRIMARY_WEIGHT, MASK_SEED_OFFSET,
};
use crate::math::interpolation::smoothstep_band;
use crate::noise::SimplexNoise;
use crate::params::MaskParams;

/// Falloff toward the top of the canvas: `1 - (1 - y/h) * bias`
pub fn vertical_falloff(y: usize, height: usize, bias: f64) -> f64 {
    1.0 - (1.0 - y as f64 / height.max(1) as f64) * bias
}

/// Fade-in factor from the nearest canvas edge, 1 when `edge_fade` is not positive
pub fn edge_factor(x: usize, y: usize, width: usize, height: usize, edge_fade: f64) -> f64 {
    if edge_fade <= 0.0 {
        return 1.0;
    }
    let edge_x = x.min(width.saturating_sub(x)) as f64 / (width as f64 * 0.5);
    let edge_y = y.min(height.saturating_sub(y)) as f64 / (height as f64 * 0.5);
    (edge_x.min(edge_y) / edge_fade).min(1.0)
}

/// Build the `[0, 1]` mask field for a canvas
pub fn build_mask_field(width: usize, height: usize, seed: i64, params: &MaskParams) -> IntensityField {
    let noise = SimplexNoise::new(seed.wrapping_add(MASK_SEED_OFFSET));
    let dim = width.min(height).max(1) as f64;

    log::trace!(
        "building {width}x{height} mask field (threshold {}, softness {})",
        params.threshold,
        params.softness
    );

    IntensityField::from_fn(width, height, |x, y| {
        let nx = x as f64 / dim * params.scale;
        let ny = y as f64 / dim * params.scale;

        let mut value = noise.sample(nx, ny) * MASK_PRIMARY_WEIGHT;
        value += noise.sample(nx * MASK_DETAIL_FREQUENCY, ny * MASK_DETAIL_FREQUENCY)
            * MASK_DETAIL_WEIGHT;
        value = (value + 1.0) * 0.5;

        value *= vertical_falloff(y, height, params.vertical_bias);
        value *= edge_factor(x, y, width, height, params.edge_fade);

        smoothstep_band(value, params.threshold, params.softness) as f32
    })
}
