//! Stepped bars as rotated rectangles, one per visible grid cell

use crate::io::configuration::MIN_VECTOR_BAR_WIDTH;
use crate::raster::screen::Screen;
use crate::raster::stepped::SteppedGrid;
use crate::vector::document::Primitive;

/// Test whether a cell centre lies within two periods of the canvas
pub fn near_canvas(x: i64, y: i64, width: usize, height: usize, period: f64) -> bool {
    let margin = period * 2.0;
    let (x, y) = (x as f64, y as f64);
    x >= -margin && x < width as f64 + margin && y >= -margin && y < height as f64 + margin
}

/// Emit one bar per cell whose thickness reaches the visibility threshold
pub fn extract(screen: &Screen<'_>, cell_size: f64) -> Vec<Primitive> {
    let grid = SteppedGrid::new(screen.width, screen.height, screen.period, cell_size);

    grid.cells()
        .filter_map(|(ai, li)| {
            let (cx, cy) = grid.center(&screen.rotation, ai, li);
            if !near_canvas(cx, cy, screen.width, screen.height, grid.across_period) {
                return None;
            }

            let bar = screen.clamped_darkness(cx, cy) * screen.thickness * grid.across_period;
            (bar >= MIN_VECTOR_BAR_WIDTH).then(|| Primitive::RotatedRect {
                x: -bar / 2.0,
                y: -grid.along_size / 2.0,
                width: bar,
                height: grid.along_size + 0.5,
                origin: (cx, cy),
                angle: screen.rotation.degrees,
            })
        })
        .collect()
}
