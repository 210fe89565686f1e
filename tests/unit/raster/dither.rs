//! Tests for the hashed-threshold dither

#[cfg(test)]
mod tests {
    use halftone::field::{Fields, IntensityField};
    use halftone::noise::pixel_threshold;
    use halftone::params::Parameters;
    use halftone::raster::Screen;
    use halftone::raster::dither;

    fn uniform(width: usize, height: usize, value: f32) -> Fields {
        Fields {
            source: IntensityField::from_fn(width, height, |_, _| value),
            mask: None,
        }
    }

    // Tests full darkness at double thickness inks every pixel
    // Verified by comparing with greater-or-equal against a threshold of two
    #[test]
    fn test_black_fills() {
        let mut params = Parameters::default();
        params.halftone.thickness = 2.0;
        let fields = uniform(24, 16, 0.0);
        let screen = Screen::new(24, 16, &params, &fields);

        assert_eq!(dither::rasterize(&screen, 500).count(), 24 * 16);
    }

    // Tests a white field takes no ink
    // Verified by using greater-or-equal in the threshold test
    #[test]
    fn test_white_is_empty() {
        let fields = uniform(24, 16, 255.0);
        let screen = Screen::new(24, 16, &Parameters::default(), &fields);

        assert_eq!(dither::rasterize(&screen, 500).count(), 0);
    }

    // Tests every pixel compares its darkness with its own hashed threshold
    // Verified by swapping x and y in the hash call
    #[test]
    fn test_mid_gray_follows_threshold() {
        let (width, height) = (20, 12);
        let fields = uniform(width, height, 127.5);
        let screen = Screen::new(width, height, &Parameters::default(), &fields);
        let coverage = dither::rasterize(&screen, 42);

        for y in 0..height {
            for x in 0..width {
                let index = y * width + x;
                let expected = 0.5 > pixel_threshold(x, y, 42);
                assert_eq!(coverage.contains(index), expected);
                assert_eq!(dither::is_inked(&screen, x, y, index, 42), expected);
            }
        }
        assert!(coverage.count() > 0);
        assert!(coverage.count() < width * height);
    }

    // Tests the seed changes the pattern
    // Verified by dropping the seed from the hash
    #[test]
    fn test_seed_changes_pattern() {
        let fields = uniform(32, 32, 127.5);
        let screen = Screen::new(32, 32, &Parameters::default(), &fields);

        assert_ne!(dither::rasterize(&screen, 1), dither::rasterize(&screen, 2));
    }
}
