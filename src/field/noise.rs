//! Noise source field
//!
//! Coordinates are normalized by the shorter canvas side so features keep their
//! proportions on non-square canvases.

use crate::field::IntensityField;
use crate::io::configuration::{MAX_OCTAVES, WARP_FREQUENCY, WARP_OFFSET, WARP_SEED_OFFSET};
use crate::math::interpolation::clamp_unit;
use crate::noise::SimplexNoise;
use crate::params::{NoiseParams, NoiseVariant};

/// Fold valleys into ridges: `(1 - |v|)^2 * 2 - 1`
pub fn ridge(value: f64) -> f64 {
    let folded = 1.0 - value.abs();
    folded * folded * 2.0 - 1.0
}

/// Fractal sum of `octaves` layers, normalized by the summed amplitude
pub fn fractal_sum(
    noise: &SimplexNoise,
    x: f64,
    y: f64,
    octaves: u32,
    persistence: f64,
    ridged: bool,
) -> f64 {
    let mut value = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut total_amplitude = 0.0;

    for _ in 0..octaves.clamp(1, MAX_OCTAVES) {
        let mut sample = noise.sample(x * frequency, y * frequency);
        if ridged {
            sample = ridge(sample);
        }
        value += sample * amplitude;
        total_amplitude += amplitude;
        amplitude *= persistence;
        frequency *= 2.0;
    }

    value / total_amplitude
}

/// Distort noise-space coordinates with a second noise instance
///
/// The y offset is sampled at the already displaced x so the two axes do not
/// move in lockstep.
pub fn warp_point(warp: &SimplexNoise, x: f64, y: f64, amount: f64) -> (f64, f64) {
    let warped_x = x + warp.sample(x * WARP_FREQUENCY, y * WARP_FREQUENCY) * amount;
    let warped_y = y + warp.sample(
        warped_x * WARP_FREQUENCY + WARP_OFFSET,
        y * WARP_FREQUENCY + WARP_OFFSET,
    ) * amount;
    (warped_x, warped_y)
}

/// Remap a normalized noise value by contrast and brightness onto `[0, 255]`
pub fn tone_map(value: f64, contrast: f64, brightness: f64) -> f32 {
    let stretched = (value - 0.5) * contrast + 0.5;
    let shifted = stretched + brightness / 255.0;
    (clamp_unit(shifted) * 255.0) as f32
}

/// Build the noise field for a canvas
pub fn build_noise_field(width: usize, height: usize, params: &NoiseParams) -> IntensityField {
    let noise = SimplexNoise::new(params.seed);
    let warp = (params.variant == NoiseVariant::Warp)
        .then(|| SimplexNoise::new(params.seed.wrapping_add(WARP_SEED_OFFSET)));
    let ridged = params.variant == NoiseVariant::Ridged;
    let dim = width.min(height).max(1) as f64;

    log::trace!(
        "building {width}x{height} noise field (seed {}, {:?})",
        params.seed,
        params.variant
    );

    IntensityField::from_fn(width, height, |x, y| {
        let mut nx = x as f64 / dim * params.scale;
        let mut ny = y as f64 / dim * params.scale;

        if let Some(warp) = &warp {
            (nx, ny) = warp_point(warp, nx, ny, params.warp_amount);
        }

        let value = fractal_sum(&noise, nx, ny, params.octaves, params.persistence, ridged);
        tone_map((value + 1.0) * 0.5, params.contrast, params.brightness)
    })
}
