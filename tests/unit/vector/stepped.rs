//! Tests for stepped bars as rotated rectangles

#[cfg(test)]
mod tests {
    use halftone::field::{Fields, IntensityField};
    use halftone::params::Parameters;
    use halftone::raster::Screen;
    use halftone::vector::Primitive;
    use halftone::vector::stepped::{extract, near_canvas};

    // Tests the canvas margin is two periods on every side
    // Verified by using a one-period margin
    #[test]
    fn test_near_canvas() {
        assert!(near_canvas(-20, 0, 100, 100, 10.0));
        assert!(!near_canvas(-21, 0, 100, 100, 10.0));
        assert!(near_canvas(119, 50, 100, 100, 10.0));
        assert!(!near_canvas(120, 50, 100, 100, 10.0));
        assert!(!near_canvas(50, 120, 100, 100, 10.0));
    }

    // Tests each nearby cell of a black field becomes one full-period bar
    // Verified by skipping the along overlap
    #[test]
    fn test_black_bars() {
        let mut params = Parameters::default();
        params.halftone.angle = 0.0;
        params.halftone.frequency = 10.0;
        let fields = Fields {
            source: IntensityField::from_fn(100, 100, |_, _| 0.0),
            mask: None,
        };
        let screen = Screen::new(100, 100, &params, &fields);

        let primitives = extract(&screen, 2.0);

        assert_eq!(primitives.len(), 14 * 7);
        assert!(primitives.iter().all(|primitive| matches!(
            primitive,
            Primitive::RotatedRect { x, width, height, .. }
                if (*x + 5.0).abs() < f64::EPSILON
                    && (*width - 10.0).abs() < f64::EPSILON
                    && (*height - 20.5).abs() < f64::EPSILON
        )));
    }

    // Tests thin bars under half a pixel are dropped
    // Verified by keeping every bar
    #[test]
    fn test_thin_bars_dropped() {
        let mut params = Parameters::default();
        params.halftone.angle = 0.0;
        params.halftone.frequency = 10.0;
        params.halftone.thickness = 0.04;
        let fields = Fields {
            source: IntensityField::from_fn(100, 100, |_, _| 0.0),
            mask: None,
        };
        let screen = Screen::new(100, 100, &params, &fields);

        assert!(extract(&screen, 2.0).is_empty());
    }
}
