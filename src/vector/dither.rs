//! Dither as run-length rectangles, one per horizontal run of inked pixels

use crate::raster::dither;
use crate::raster::screen::Screen;
use crate::vector::accumulator::RunAccumulator;
use crate::vector::document::Primitive;
use std::ops::Range;

const fn run_rect(run: Range<usize>, y: usize) -> Primitive {
    Primitive::Rect {
        x: run.start,
        y,
        width: run.end - run.start,
        height: 1,
    }
}

/// Emit a one-pixel-tall rectangle for every run of inked pixels
pub fn extract(screen: &Screen<'_>, seed: i64) -> Vec<Primitive> {
    let coverage = dither::rasterize(screen, seed);
    let mut primitives = Vec::new();

    for y in 0..coverage.height() {
        let row = coverage.row(y);
        let mut runs = RunAccumulator::new();

        for (x, covered) in row.iter().by_vals().enumerate() {
            if let Some(run) = runs.step(x, covered) {
                primitives.push(run_rect(run, y));
            }
        }
        if let Some(run) = runs.finish(row.len()) {
            primitives.push(run_rect(run, y));
        }
    }

    primitives
}
