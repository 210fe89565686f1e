//! Shape-cell halftone
//!
//! The rotated plane is tiled with square cells one period wide. Inside each
//! cell a shape scaled by the ink amount is tested in the cell's local
//! `[-0.5, 0.5]^2` frame.

use crate::math::geometry::{Rotation, cell_center, diagonal};
use crate::params::{CellShape, RenderMode};
use crate::raster::coverage::Coverage;
use crate::raster::screen::Screen;

/// Square cell layout of a shape screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGrid {
    /// Cell edge length in pixels
    pub period: f64,
    /// Cells on each side of the origin along both axes
    pub num_cells: i64,
}

impl CellGrid {
    /// Grid covering the rotated canvas
    pub fn new(width: usize, height: usize, period: f64) -> Self {
        Self {
            period,
            num_cells: (diagonal(width, height) / period).ceil() as i64 + 2,
        }
    }

    /// Every `(cell_x, cell_y)` index, x-major
    pub fn cells(&self) -> impl Iterator<Item = (i64, i64)> + use<> {
        let n = self.num_cells;
        (-n..=n).flat_map(move |cx| (-n..=n).map(move |cy| (cx, cy)))
    }

    /// Canvas pixel nearest to a cell centre
    pub fn center(&self, rotation: &Rotation, cell_x: i64, cell_y: i64) -> (i64, i64) {
        cell_center(
            rotation,
            (cell_x as f64 + 0.5) * self.period,
            (cell_y as f64 + 0.5) * self.period,
        )
    }
}

/// Point-in-shape test in cell-local coordinates for a normalized size
pub fn inside(shape: CellShape, cx: f64, cy: f64, size: f64) -> bool {
    let half = size * 0.5;
    match shape {
        CellShape::Square => cx.abs() < half && cy.abs() < half,
        CellShape::Circle => cx * cx + cy * cy < half * half,
        CellShape::Diamond => cx.abs() + cy.abs() < half,
        CellShape::Ellipse => {
            let quarter = size * 0.25;
            cx * cx / (half * half) + cy * cy / (quarter * quarter) < 1.0
        }
        CellShape::Cross => {
            let arm_width = size * 0.2;
            let arm_length = size * 0.5;
            (cx.abs() < arm_width && cy.abs() < arm_length)
                || (cy.abs() < arm_width && cx.abs() < arm_length)
        }
    }
}

/// Rasterize shapes, sampling once per cell or once per pixel
pub fn rasterize(screen: &Screen<'_>, shape: CellShape, sampling: RenderMode) -> Coverage {
    let grid = CellGrid::new(screen.width, screen.height, screen.period);
    let period = grid.period;

    Coverage::from_fn(screen.width, screen.height, |x, y, index| {
        let (rx, ry) = screen.rotation.to_screen(x as f64, y as f64);
        let cell_x = (rx / period).floor();
        let cell_y = (ry / period).floor();
        let cx = rx / period - cell_x - 0.5;
        let cy = ry / period - cell_y - 0.5;

        let darkness = match sampling {
            RenderMode::Stepped => {
                let (sx, sy) = grid.center(&screen.rotation, cell_x as i64, cell_y as i64);
                screen.strict_darkness(sx, sy) * screen.fields.mask_factor(index)
            }
            RenderMode::Smooth => screen.pixel_darkness(index),
        };

        inside(shape, cx, cy, darkness * screen.thickness)
    })
}
