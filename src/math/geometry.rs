//! Rotated halftone screen geometry
//!
//! Canvas pixels `(x, y)` map to screen coordinates `(across, along)`, where
//! `across` runs perpendicular to the bars and `along` runs with them.

/// Round half toward positive infinity
///
/// Cell centres land exactly on `.5` for odd periods, and ties have to resolve
/// the same way on both sides of zero.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Length of the canvas diagonal in pixels
pub fn diagonal(width: usize, height: usize) -> f64 {
    (width as f64).hypot(height as f64)
}

/// Screen rotation by an angle in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    /// Rotation in degrees, kept for vector transforms
    pub degrees: f64,
    /// Cosine of the angle
    pub cos: f64,
    /// Sine of the angle
    pub sin: f64,
}

impl Rotation {
    /// Rotation by `degrees`
    pub fn from_degrees(degrees: f64) -> Self {
        let radians = degrees.to_radians();
        Self {
            degrees,
            cos: radians.cos(),
            sin: radians.sin(),
        }
    }

    /// Project a canvas point onto `(across, along)`
    pub fn to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (self.cos * x + self.sin * y, -self.sin * x + self.cos * y)
    }

    /// Map `(across, along)` back onto the canvas
    pub fn to_canvas(&self, across: f64, along: f64) -> (f64, f64) {
        (
            self.cos * across - self.sin * along,
            self.sin * across + self.cos * along,
        )
    }
}

/// Canvas point nearest to a screen-space cell centre
pub fn cell_center(rotation: &Rotation, across: f64, along: f64) -> (i64, i64) {
    let (x, y) = rotation.to_canvas(across, along);
    (round_half_up(x) as i64, round_half_up(y) as i64)
}

/// Index of a point inside the canvas, if it is inside
pub fn pixel_index(x: i64, y: i64, width: usize, height: usize) -> Option<usize> {
    let col = usize::try_from(x).ok()?;
    let row = usize::try_from(y).ok()?;
    (col < width && row < height).then_some(row * width + col)
}

/// Index of the canvas pixel nearest to a point, clamping outside points to the edge
pub fn clamped_pixel_index(x: i64, y: i64, width: usize, height: usize) -> usize {
    let col = x.clamp(0, width.saturating_sub(1) as i64) as usize;
    let row = y.clamp(0, height.saturating_sub(1) as i64) as usize;
    row * width + col
}
