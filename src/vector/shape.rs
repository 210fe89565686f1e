//! Cell shapes as native vector primitives

use crate::io::configuration::MIN_VECTOR_SHAPE_SIZE;
use crate::params::CellShape;
use crate::raster::screen::Screen;
use crate::raster::shape::CellGrid;
use crate::vector::document::Primitive;
use crate::vector::stepped::near_canvas;

/// Primitives for one shape of radius `r` centred on `center`
pub fn shape_primitives(
    shape: CellShape,
    center: (i64, i64),
    r: f64,
    arm_width: f64,
    angle: f64,
) -> Vec<Primitive> {
    match shape {
        CellShape::Circle => vec![Primitive::Circle { center, r }],
        CellShape::Ellipse => vec![Primitive::Ellipse {
            center,
            rx: r,
            ry: r * 0.5,
            angle,
        }],
        CellShape::Square => vec![Primitive::RotatedRect {
            x: -r,
            y: -r,
            width: r * 2.0,
            height: r * 2.0,
            origin: center,
            angle,
        }],
        CellShape::Diamond => vec![Primitive::Diamond { center, r, angle }],
        CellShape::Cross => vec![
            Primitive::RotatedRect {
                x: -arm_width / 2.0,
                y: -r,
                width: arm_width,
                height: r * 2.0,
                origin: center,
                angle,
            },
            Primitive::RotatedRect {
                x: -r,
                y: -arm_width / 2.0,
                width: r * 2.0,
                height: arm_width,
                origin: center,
                angle,
            },
        ],
    }
}

/// Emit the shape of every cell whose size exceeds the visibility threshold
pub fn extract(screen: &Screen<'_>, shape: CellShape) -> Vec<Primitive> {
    let grid = CellGrid::new(screen.width, screen.height, screen.period);

    grid.cells()
        .filter_map(|(cell_x, cell_y)| {
            let center = grid.center(&screen.rotation, cell_x, cell_y);
            if !near_canvas(center.0, center.1, screen.width, screen.height, grid.period) {
                return None;
            }

            let size = screen.clamped_darkness(center.0, center.1) * screen.thickness;
            (size >= MIN_VECTOR_SHAPE_SIZE).then(|| {
                shape_primitives(
                    shape,
                    center,
                    size * grid.period / 2.0,
                    size * 0.2 * grid.period,
                    screen.rotation.degrees,
                )
            })
        })
        .flatten()
        .collect()
}
