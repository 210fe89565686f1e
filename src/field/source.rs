//! Source field selection and blending

use crate::field::IntensityField;
use crate::field::gradient::build_gradient_field;
use crate::field::noise::build_noise_field;
use crate::math::interpolation::{clamp_unit, lerp};
use crate::params::{BlendMode, Parameters, SourceMode};

/// Combine normalized noise `n` and gradient `g` with a blend operator
pub fn blend(noise: f64, gradient: f64, mix: f64, mode: BlendMode) -> f64 {
    match mode {
        BlendMode::Multiply => noise * gradient,
        BlendMode::Add => (noise * (1.0 - mix) + gradient * mix + noise * gradient * mix).min(1.0),
        BlendMode::Mix => lerp(noise, gradient, mix),
    }
}

/// Build the grayscale source field selected by the source mode
pub fn build_source_field(width: usize, height: usize, params: &Parameters) -> IntensityField {
    match params.source_mode {
        SourceMode::Noise => build_noise_field(width, height, &params.noise),
        SourceMode::Gradient => build_gradient_field(width, height, &params.gradient),
        SourceMode::Both => {
            let noise = build_noise_field(width, height, &params.noise);
            let gradient = build_gradient_field(width, height, &params.gradient);

            let mut blended = noise.values().clone();
            blended.zip_mut_with(gradient.values(), |n, &g| {
                let value = blend(
                    f64::from(*n) / 255.0,
                    f64::from(g) / 255.0,
                    params.blend.mix,
                    params.blend.mode,
                );
                *n = (clamp_unit(value) * 255.0) as f32;
            });

            IntensityField::from_array(blended)
        }
    }
}
