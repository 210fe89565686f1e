//! Smooth-line halftone
//!
//! Every pixel measures its own darkness, so bar widths vary continuously along
//! each line. The period here is not rounded to whole pixels.

use crate::raster::coverage::Coverage;
use crate::raster::screen::Screen;

/// Normalized distance from the bar centreline, 0 on the line and 1 midway between lines
pub fn centerline_distance(across: f64, period: f64) -> f64 {
    let position = ((across % period) + period) % period;
    (position / period - 0.5).abs() * 2.0
}

/// Rasterize smooth bars with an exact period
pub fn rasterize(screen: &Screen<'_>, period: f64) -> Coverage {
    Coverage::from_fn(screen.width, screen.height, |x, y, index| {
        let (across, _) = screen.rotation.to_screen(x as f64, y as f64);
        let line_width = screen.pixel_darkness(index) * screen.thickness;
        centerline_distance(across, period) < line_width
    })
}
