//! Tests for native cell shape primitives

#[cfg(test)]
mod tests {
    use halftone::field::{Fields, IntensityField};
    use halftone::params::{CellShape, Parameters};
    use halftone::raster::Screen;
    use halftone::vector::Primitive;
    use halftone::vector::shape::{extract, shape_primitives};

    // Tests each shape maps to its native element
    // Verified by emitting squares for every shape
    #[test]
    fn test_shape_primitives() {
        let circle = shape_primitives(CellShape::Circle, (4, 5), 2.0, 0.8, 30.0);
        assert_eq!(
            circle,
            vec![Primitive::Circle {
                center: (4, 5),
                r: 2.0
            }]
        );

        let ellipse = shape_primitives(CellShape::Ellipse, (4, 5), 2.0, 0.8, 30.0);
        assert_eq!(
            ellipse,
            vec![Primitive::Ellipse {
                center: (4, 5),
                rx: 2.0,
                ry: 1.0,
                angle: 30.0
            }]
        );

        let diamond = shape_primitives(CellShape::Diamond, (4, 5), 2.0, 0.8, 30.0);
        assert_eq!(
            diamond,
            vec![Primitive::Diamond {
                center: (4, 5),
                r: 2.0,
                angle: 30.0
            }]
        );
    }

    // Tests a cross is two perpendicular arms of the given width
    // Verified by emitting a single arm
    #[test]
    fn test_cross_arms() {
        let cross = shape_primitives(CellShape::Cross, (0, 0), 5.0, 2.0, 0.0);

        assert_eq!(cross.len(), 2);
        assert_eq!(
            cross.first(),
            Some(&Primitive::RotatedRect {
                x: -1.0,
                y: -5.0,
                width: 2.0,
                height: 10.0,
                origin: (0, 0),
                angle: 0.0
            })
        );
    }

    // Tests only cells within two periods of the canvas are emitted
    // Verified by emitting every grid cell
    #[test]
    fn test_black_circles() {
        let mut params = Parameters::default();
        params.halftone.angle = 0.0;
        params.halftone.frequency = 6.0;
        let fields = Fields {
            source: IntensityField::from_fn(60, 40, |_, _| 0.0),
            mask: None,
        };
        let screen = Screen::new(60, 40, &params, &fields);

        let primitives = extract(&screen, CellShape::Circle);

        assert_eq!(primitives.len(), 10 * 8);
        assert!(primitives.iter().all(|primitive| matches!(
            primitive,
            Primitive::Circle { r, .. } if (*r - 5.0).abs() < f64::EPSILON
        )));
    }
}
