//! Tests for shape-per-cell rasterization

#[cfg(test)]
mod tests {
    use halftone::field::{Fields, IntensityField};
    use halftone::math::geometry::Rotation;
    use halftone::params::{CellShape, Parameters, RenderMode};
    use halftone::raster::Screen;
    use halftone::raster::coverage::Coverage;
    use halftone::raster::shape::{CellGrid, inside, rasterize};

    fn column_count(coverage: &Coverage, x: usize) -> usize {
        (0..coverage.height())
            .filter(|y| coverage.contains(y * coverage.width() + x))
            .count()
    }

    const SHAPES: [CellShape; 5] = [
        CellShape::Square,
        CellShape::Circle,
        CellShape::Diamond,
        CellShape::Ellipse,
        CellShape::Cross,
    ];

    fn aligned_params() -> Parameters {
        let mut params = Parameters::default();
        params.halftone.angle = 0.0;
        params.halftone.frequency = 6.0;
        params
    }

    fn uniform(value: f32) -> Fields {
        Fields {
            source: IntensityField::from_fn(60, 40, |_, _| value),
            mask: None,
        }
    }

    // Tests the boundary of each shape is excluded
    // Verified by using less-or-equal in the shape tests
    #[test]
    fn test_inside_boundaries() {
        assert!(!inside(CellShape::Circle, 0.5, 0.0, 1.0));
        assert!(inside(CellShape::Circle, 0.4, 0.0, 1.0));
        assert!(!inside(CellShape::Diamond, 0.3, 0.3, 1.0));
        assert!(inside(CellShape::Diamond, 0.2, 0.2, 1.0));
        assert!(!inside(CellShape::Ellipse, 0.0, 0.3, 1.0));
        assert!(inside(CellShape::Ellipse, 0.4, 0.0, 1.0));
        assert!(!inside(CellShape::Cross, 0.3, 0.3, 1.0));
        assert!(inside(CellShape::Cross, 0.4, 0.1, 1.0));
        assert!(inside(CellShape::Square, 0.49, 0.49, 1.0));
        assert!(!inside(CellShape::Square, 0.5, 0.0, 1.0));
    }

    // Tests a zero size contains nothing, even the cell centre
    // Verified by using less-or-equal in the shape tests
    #[test]
    fn test_zero_size() {
        for shape in SHAPES {
            assert!(!inside(shape, 0.0, 0.0, 0.0), "{shape:?}");
        }
    }

    // Tests the grid spans the diagonal plus two cells on each side
    // Verified by dropping the margin cells
    #[test]
    fn test_grid_cells() {
        let grid = CellGrid::new(30, 40, 10.0);

        assert_eq!(grid.num_cells, 7);
        assert_eq!(grid.cells().count(), 15 * 15);
        assert_eq!(grid.cells().next(), Some((-7, -7)));
        assert_eq!(grid.center(&Rotation::from_degrees(0.0), 1, 2), (15, 25));
    }

    // Tests full darkness fills identically for both samplings
    // Verified by reading per-cell darkness from the wrong centre
    #[test]
    fn test_black_sampling_agrees() {
        let fields = uniform(0.0);
        let screen = Screen::new(60, 40, &aligned_params(), &fields);

        for shape in SHAPES {
            let stepped = rasterize(&screen, shape, RenderMode::Stepped);
            let smooth = rasterize(&screen, shape, RenderMode::Smooth);
            assert_eq!(stepped, smooth, "{shape:?}");
            assert!(stepped.count() > 0, "{shape:?}");
        }
    }

    // Tests a white field takes no ink when every cell centre is on the canvas
    // Verified by sampling the pixel rather than the cell centre
    #[test]
    fn test_white_is_empty() {
        let fields = uniform(255.0);
        let screen = Screen::new(60, 40, &aligned_params(), &fields);

        for shape in SHAPES {
            assert_eq!(rasterize(&screen, shape, RenderMode::Stepped).count(), 0);
            assert_eq!(rasterize(&screen, shape, RenderMode::Smooth).count(), 0);
        }
    }

    // Tests squares at full darkness cover whole cells except their edges
    // Verified by scaling the half extent by the full size
    #[test]
    fn test_black_squares() {
        let fields = uniform(0.0);
        let screen = Screen::new(60, 40, &aligned_params(), &fields);
        let coverage = rasterize(&screen, CellShape::Square, RenderMode::Smooth);

        assert_eq!(column_count(&coverage, 0), 0);
        assert_eq!(column_count(&coverage, 5), 36);
        assert_eq!(coverage.count(), 54 * 36);
    }
}
