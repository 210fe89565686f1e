//! Vector extraction
//!
//! [`export_vector`] mirrors [`render`](crate::raster::render): it builds the
//! same fields and dispatches on the same [`Strategy`], but emits geometric
//! primitives instead of pixels. Cell shapes always sample once per cell here,
//! whatever the render mode.

/// Scanline run and ribbon segment state machines
pub mod accumulator;
/// Run-length rectangles for dither output
pub mod dither;
/// Primitives and the SVG document
pub mod document;
/// Native shapes for cell halftones
pub mod shape;
/// Variable-width ribbons for smooth lines
pub mod smooth;
/// Rotated rectangles for stepped lines
pub mod stepped;

pub use document::{Primitive, VectorDocument};

use crate::field::Fields;
use crate::params::{Parameters, Strategy};
use crate::raster::Screen;

/// Extract the primitives for already built fields
pub fn extract(width: usize, height: usize, params: &Parameters, fields: &Fields) -> Vec<Primitive> {
    let screen = Screen::new(width, height, params, fields);

    match params.strategy() {
        Strategy::Dither => dither::extract(&screen, params.noise.seed),
        Strategy::Cell { shape, .. } => shape::extract(&screen, shape),
        Strategy::SteppedLine => stepped::extract(&screen, params.halftone.cell_size),
        Strategy::SmoothLine => smooth::extract(&screen),
    }
}

/// Build the vector scene for a parameter structure
///
/// Deterministic like [`render`](crate::raster::render). Width and height must be positive.
pub fn export_vector(width: usize, height: usize, params: &Parameters) -> VectorDocument {
    let fields = Fields::build(width, height, params);
    let primitives = extract(width, height, params, &fields);

    log::debug!(
        "extracted {} primitives for {width}x{height} with {:?}",
        primitives.len(),
        params.strategy()
    );

    VectorDocument::from_primitives(width, height, &params.halftone, primitives)
}
