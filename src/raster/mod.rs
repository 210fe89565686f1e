//! Halftone rasterization
//!
//! [`render`] builds the fields, runs exactly one rasterizer chosen by
//! [`Strategy`](crate::params::Strategy), and paints the resulting coverage.

/// RGBA buffers and palettes
pub mod buffer;
/// Bit-packed ink coverage
pub mod coverage;
/// Hashed-threshold dither
pub mod dither;
/// Shared screen geometry and darkness
pub mod screen;
/// Shape-per-cell halftone
pub mod shape;
/// Continuous-width line halftone
pub mod smooth;
/// Cell-quantized line halftone
pub mod stepped;

pub use buffer::{Palette, PixelBuffer};
pub use coverage::Coverage;
pub use screen::Screen;

use crate::field::Fields;
use crate::params::{Parameters, Strategy};

/// Compute which pixels take ink for already built fields
pub fn rasterize(width: usize, height: usize, params: &Parameters, fields: &Fields) -> Coverage {
    let screen = Screen::new(width, height, params, fields);
    let strategy = params.strategy();

    log::debug!(
        "rasterizing {width}x{height} with {strategy:?} (period {})",
        screen.period
    );

    match strategy {
        Strategy::Dither => dither::rasterize(&screen, params.noise.seed),
        Strategy::Cell { shape, sampling } => shape::rasterize(&screen, shape, sampling),
        Strategy::SteppedLine => stepped::rasterize(&screen, params.halftone.cell_size),
        Strategy::SmoothLine => smooth::rasterize(
            &screen,
            screen::exact_period(width, params.halftone.frequency),
        ),
    }
}

/// Render a parameter structure into an RGBA buffer of `width * height * 4` bytes
///
/// Pure and deterministic: equal inputs always produce byte-identical buffers.
/// Width and height must be positive.
pub fn render(width: usize, height: usize, params: &Parameters) -> PixelBuffer {
    let fields = Fields::build(width, height, params);
    let coverage = rasterize(width, height, params, &fields);
    PixelBuffer::paint(&coverage, &Palette::resolve(&params.halftone))
}
