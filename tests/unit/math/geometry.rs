//! Tests for rotation, rounding and pixel addressing

#[cfg(test)]
mod tests {
    use halftone::math::geometry::{
        Rotation, cell_center, clamped_pixel_index, diagonal, pixel_index, round_half_up,
    };

    // Tests ties round toward positive infinity on both sides of zero
    // Verified by using f64::round, which rounds ties away from zero
    #[test]
    fn test_round_half_up() {
        assert!((round_half_up(2.5) - 3.0).abs() < f64::EPSILON);
        assert!((round_half_up(-2.5) + 2.0).abs() < f64::EPSILON);
        assert!((round_half_up(2.49) - 2.0).abs() < f64::EPSILON);
        assert!((round_half_up(-0.5)).abs() < f64::EPSILON);
    }

    // Tests the canvas diagonal
    // Verified by summing the sides
    #[test]
    fn test_diagonal() {
        assert!((diagonal(3, 4) - 5.0).abs() < f64::EPSILON);
    }

    // Tests screen and canvas transforms invert each other
    // Verified by flipping the sign of the along term
    #[test]
    fn test_rotation_round_trip() {
        for degrees in [0.0, 17.0, 45.0, 90.0, 213.5] {
            let rotation = Rotation::from_degrees(degrees);
            let (across, along) = rotation.to_screen(12.0, -7.5);
            let (x, y) = rotation.to_canvas(across, along);
            assert!((x - 12.0).abs() < 1e-9 && (y + 7.5).abs() < 1e-9, "{degrees}");
        }
    }

    // Tests a zero rotation maps x to across and y to along
    // Verified by swapping the outputs of to_screen
    #[test]
    fn test_identity_rotation() {
        let rotation = Rotation::from_degrees(0.0);
        assert_eq!(rotation.to_screen(3.0, 8.0), (3.0, 8.0));
        assert_eq!(cell_center(&rotation, 4.5, 9.5), (5, 10));
    }

    // Tests a quarter turn puts y on the across axis
    // Verified by using the cosine for the across term
    #[test]
    fn test_quarter_turn() {
        let rotation = Rotation::from_degrees(90.0);
        let (across, along) = rotation.to_screen(2.0, 5.0);
        assert!((across - 5.0).abs() < 1e-9);
        assert!((along + 2.0).abs() < 1e-9);
    }

    // Tests pixel indices are row-major and reject outside points
    // Verified by computing x * height + y
    #[test]
    fn test_pixel_index() {
        assert_eq!(pixel_index(2, 1, 4, 3), Some(6));
        assert_eq!(pixel_index(-1, 1, 4, 3), None);
        assert_eq!(pixel_index(4, 0, 4, 3), None);
        assert_eq!(pixel_index(0, 3, 4, 3), None);
    }

    // Tests outside points clamp to the nearest edge pixel
    // Verified by clamping to width instead of width - 1
    #[test]
    fn test_clamped_pixel_index() {
        assert_eq!(clamped_pixel_index(-5, -5, 4, 3), 0);
        assert_eq!(clamped_pixel_index(10, 1, 4, 3), 7);
        assert_eq!(clamped_pixel_index(10, 10, 4, 3), 11);
        assert_eq!(clamped_pixel_index(1, 1, 4, 3), 5);
    }
}
