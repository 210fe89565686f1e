//! Geometry and ink amounts shared by every halftone path

use crate::field::Fields;
use crate::io::configuration::{MIN_FREQUENCY, MIN_PERIOD};
use crate::math::geometry::{Rotation, clamped_pixel_index, pixel_index, round_half_up};
use crate::params::Parameters;

/// Ink amount for a brightness: `1 - b`, or `b` itself when inverted
pub fn darkness(brightness: f64, invert: bool) -> f64 {
    if invert { brightness } else { 1.0 - brightness }
}

/// Exact period `width / frequency`, floored at the minimum period
pub fn exact_period(width: usize, frequency: f64) -> f64 {
    (width as f64 / frequency.max(MIN_FREQUENCY)).max(MIN_PERIOD)
}

/// Whole-pixel period `round(width / frequency)`, floored at the minimum period
pub fn rounded_period(width: usize, frequency: f64) -> f64 {
    round_half_up(width as f64 / frequency.max(MIN_FREQUENCY)).max(MIN_PERIOD)
}

/// Halftone screen over a pair of built fields
#[derive(Debug, Clone, Copy)]
pub struct Screen<'a> {
    /// Fields being screened
    pub fields: &'a Fields,
    /// Canvas width in pixels
    pub width: usize,
    /// Canvas height in pixels
    pub height: usize,
    /// Screen rotation
    pub rotation: Rotation,
    /// Whole-pixel across-axis period
    pub period: f64,
    /// Ink multiplier
    pub thickness: f64,
    /// Whether brightness rather than its complement is ink
    pub invert: bool,
}

impl<'a> Screen<'a> {
    /// Set up the screen for a canvas
    pub fn new(width: usize, height: usize, params: &Parameters, fields: &'a Fields) -> Self {
        Self {
            fields,
            width,
            height,
            rotation: Rotation::from_degrees(params.halftone.angle),
            period: rounded_period(width, params.halftone.frequency),
            thickness: params.halftone.thickness,
            invert: params.halftone.invert,
        }
    }

    /// Masked darkness of a pixel
    pub fn pixel_darkness(&self, index: usize) -> f64 {
        darkness(self.fields.brightness(index), self.invert) * self.fields.mask_factor(index)
    }

    /// Unmasked darkness at a point, with points off the canvas reading as zero brightness
    pub fn strict_darkness(&self, x: i64, y: i64) -> f64 {
        let brightness = pixel_index(x, y, self.width, self.height)
            .map_or(0.0, |index| self.fields.brightness(index));
        darkness(brightness, self.invert)
    }

    /// Masked darkness at the canvas pixel nearest to a point
    pub fn clamped_darkness(&self, x: i64, y: i64) -> f64 {
        self.pixel_darkness(self.clamped_index(x, y))
    }

    /// Mask factor at the canvas pixel nearest to a point
    pub fn clamped_mask(&self, x: i64, y: i64) -> f64 {
        self.fields.mask_factor(self.clamped_index(x, y))
    }

    fn clamped_index(&self, x: i64, y: i64) -> usize {
        clamped_pixel_index(x, y, self.width, self.height)
    }
}
