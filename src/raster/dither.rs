//! Hashed-threshold dither
//!
//! No grid at all: a pixel takes ink when its scaled darkness beats a threshold
//! hashed from its coordinates and the seed.

use crate::noise::pixel_threshold;
use crate::raster::coverage::Coverage;
use crate::raster::screen::Screen;

/// Whether the pixel at `(x, y)` takes ink
pub fn is_inked(screen: &Screen<'_>, x: usize, y: usize, index: usize, seed: i64) -> bool {
    screen.pixel_darkness(index) * screen.thickness > pixel_threshold(x, y, seed)
}

/// Rasterize the dither pattern
pub fn rasterize(screen: &Screen<'_>, seed: i64) -> Coverage {
    Coverage::from_fn(screen.width, screen.height, |x, y, index| {
        is_inked(screen, x, y, index, seed)
    })
}
