//! Directional gradient source field
//!
//! Pixels are projected onto the direction vector in canvas-normalized
//! coordinates, and the projection is rescaled against the unit square corners
//! so the ramp always spans the canvas whatever the angle.

use crate::field::IntensityField;
use crate::math::interpolation::clamp_unit;
use crate::params::GradientParams;

/// Fraction of the span at which the ramp sits when `start == end`
const DEGENERATE_LEVEL: f64 = 0.5;

/// Apply the start/end window to a normalized projection `t`
///
/// Before `start` the ramp is fully on, after `end` fully off. When
/// `start > end` the direction flips, and `start == end` yields a constant.
pub fn window(t: f64, start: f64, end: f64) -> f64 {
    if start < end {
        if t <= start {
            1.0
        } else if t >= end {
            0.0
        } else {
            1.0 - (t - start) / (end - start)
        }
    } else if start > end {
        if t >= start {
            1.0
        } else if t <= end {
            0.0
        } else {
            (t - end) / (start - end)
        }
    } else {
        DEGENERATE_LEVEL
    }
}

/// Build the gradient field for a canvas
pub fn build_gradient_field(width: usize, height: usize, params: &GradientParams) -> IntensityField {
    let radians = params.direction.to_radians();
    let (dx, dy) = (radians.cos(), radians.sin());
    let start = params.start / 100.0;
    let end = params.end / 100.0;

    let (t_min, t_max) = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]
        .iter()
        .map(|(cx, cy)| cx * dx + cy * dy)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), t| {
            (lo.min(t), hi.max(t))
        });
    let span = t_max - t_min;
    // The unit square always projects to a span of at least 1
    let span = if span > f64::EPSILON { span } else { 1.0 };

    log::trace!(
        "building {width}x{height} gradient field ({} deg, {}%..{}%)",
        params.direction,
        params.start,
        params.end
    );

    let w = width.max(1) as f64;
    let h = height.max(1) as f64;
    IntensityField::from_fn(width, height, |x, y| {
        let raw = ((x as f64 / w) * dx + (y as f64 / h) * dy - t_min) / span;
        let t = clamp_unit(window(raw, start, end)).powf(params.curve);
        (t * 255.0) as f32
    })
}
