use bitvec::prelude::*;
use std::fmt;

/// Bit-packed record of which pixels receive ink
///
/// Every rasterizer produces one of these. Painting it with a palette yields
/// the final buffer, and the vector dither path reads its rows directly.
#[derive(Clone, PartialEq, Eq)]
pub struct Coverage {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl Coverage {
    /// Create an empty coverage for a canvas
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
        }
    }

    /// Evaluate `covered(x, y, index)` for every pixel in row-major order
    pub fn from_fn(
        width: usize,
        height: usize,
        mut covered: impl FnMut(usize, usize, usize) -> bool,
    ) -> Self {
        let mut coverage = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let index = y * width + x;
                if covered(x, y, index) {
                    coverage.insert(index);
                }
            }
        }
        coverage
    }

    /// Width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels on the canvas
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Test for an empty canvas
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Mark a row-major pixel as covered
    pub fn insert(&mut self, index: usize) {
        if index < self.bits.len() {
            self.bits.set(index, true);
        }
    }

    /// Test whether a row-major pixel is covered
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Covered flags of one scanline
    pub fn row(&self, y: usize) -> &BitSlice {
        let start = (y * self.width).min(self.bits.len());
        let end = (start + self.width).min(self.bits.len());
        self.bits.get(start..end).unwrap_or_else(|| BitSlice::empty())
    }

    /// Count covered pixels
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test that every pixel covered here is also covered in `other`
    pub fn is_subset_of(&self, other: &Self) -> bool {
        let mut outside = self.bits.clone();
        let uncovered = !other.bits.clone();
        outside &= &uncovered;
        outside.not_any()
    }
}

impl fmt::Debug for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Coverage({}x{}, {} covered)",
            self.width,
            self.height,
            self.count()
        )
    }
}
