//! Stepped-line halftone
//!
//! Bars are cut into a grid of cells, across-index by along-index. Each cell's
//! bar thickness is computed once from the source at the cell centre, which
//! gives the bars their digitized, stair-stepped look.

use crate::io::configuration::MIN_PERIOD;
use crate::math::geometry::{Rotation, cell_center, diagonal, round_half_up};
use crate::raster::coverage::Coverage;
use crate::raster::screen::Screen;
use ndarray::Array2;

/// Cell layout of a stepped-line screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteppedGrid {
    /// Spacing between bar centrelines
    pub across_period: f64,
    /// Length of one cell along the bar
    pub along_size: f64,
    /// Cells on each side of the origin across the bars
    pub num_across: i64,
    /// Cells on each side of the origin along the bars
    pub num_along: i64,
}

impl SteppedGrid {
    /// Grid covering the rotated canvas for a period and along-cell multiplier
    pub fn new(width: usize, height: usize, period: f64, cell_size: f64) -> Self {
        let along_size = round_half_up(period * cell_size).max(MIN_PERIOD);
        let diagonal = diagonal(width, height);

        Self {
            across_period: period,
            along_size,
            num_across: (diagonal / period).ceil() as i64 + 2,
            num_along: (diagonal / along_size).ceil() as i64 + 2,
        }
    }

    /// Every `(across, along)` cell index, across-major
    pub fn cells(&self) -> impl Iterator<Item = (i64, i64)> + use<> {
        let num_along = self.num_along;
        (-self.num_across..=self.num_across)
            .flat_map(move |ai| (-num_along..=num_along).map(move |li| (ai, li)))
    }

    /// Canvas pixel nearest to a cell centre
    pub fn center(&self, rotation: &Rotation, ai: i64, li: i64) -> (i64, i64) {
        cell_center(
            rotation,
            (ai as f64 + 0.5) * self.across_period,
            (li as f64 + 0.5) * self.along_size,
        )
    }

    /// Table slot of a cell index, `None` outside the grid
    fn slot(&self, ai: i64, li: i64) -> Option<(usize, usize)> {
        let row = usize::try_from(ai + self.num_across).ok()?;
        let col = usize::try_from(li + self.num_along).ok()?;
        Some((row, col))
    }

    /// Bar thickness in pixels for every cell
    ///
    /// Centres off the canvas read as zero brightness; the mask is read at the
    /// centre clamped onto the canvas.
    pub fn thickness_table(&self, screen: &Screen<'_>) -> Array2<f32> {
        let rows = (self.num_across * 2 + 1) as usize;
        let cols = (self.num_along * 2 + 1) as usize;

        Array2::from_shape_fn((rows, cols), |(row, col)| {
            let ai = row as i64 - self.num_across;
            let li = col as i64 - self.num_along;
            let (cx, cy) = self.center(&screen.rotation, ai, li);
            let darkness = screen.strict_darkness(cx, cy) * screen.clamped_mask(cx, cy);
            (darkness * screen.thickness * self.across_period) as f32
        })
    }
}

/// Rasterize stepped bars
pub fn rasterize(screen: &Screen<'_>, cell_size: f64) -> Coverage {
    let grid = SteppedGrid::new(screen.width, screen.height, screen.period, cell_size);
    let table = grid.thickness_table(screen);
    let half_period = grid.across_period / 2.0;

    log::trace!(
        "stepped grid: period {} along {} ({}x{} cells)",
        grid.across_period,
        grid.along_size,
        table.nrows(),
        table.ncols()
    );

    Coverage::from_fn(screen.width, screen.height, |x, y, _| {
        let (across, along) = screen.rotation.to_screen(x as f64, y as f64);
        let ai = (across / grid.across_period).floor();
        let li = (along / grid.along_size).floor();
        let position = across - ai * grid.across_period;

        grid.slot(ai as i64, li as i64)
            .and_then(|slot| table.get(slot).copied())
            .is_some_and(|bar| (position - half_period).abs() <= f64::from(bar) / 2.0)
    })
}
