//! RGBA output buffer and coverage painting

use crate::params::{Color, HalftoneParams};
use crate::raster::coverage::Coverage;

/// Ink and paper colors after inversion and transparency are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Color of covered pixels, always opaque
    pub ink: Color,
    /// Color of uncovered pixels
    pub paper: Color,
    /// Alpha of uncovered pixels
    pub paper_alpha: u8,
}

impl Palette {
    /// Resolve the palette, swapping colors when `invert` is set
    pub const fn resolve(params: &HalftoneParams) -> Self {
        let (ink, paper) = if params.invert {
            (params.background, params.foreground)
        } else {
            (params.foreground, params.background)
        };

        Self {
            ink,
            paper,
            paper_alpha: if params.transparent { 0 } else { 255 },
        }
    }

    /// RGBA bytes for a covered or uncovered pixel
    pub const fn pixel(&self, covered: bool) -> [u8; 4] {
        if covered {
            self.ink.rgba(255)
        } else {
            self.paper.rgba(self.paper_alpha)
        }
    }
}

/// Row-major RGBA pixels, four bytes per pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Paint a coverage mask with a palette
    pub fn paint(coverage: &Coverage, palette: &Palette) -> Self {
        let mut data = vec![0; coverage.len() * 4];
        for (index, pixel) in data.chunks_exact_mut(4).enumerate() {
            pixel.copy_from_slice(&palette.pixel(coverage.contains(index)));
        }

        Self {
            width: coverage.width(),
            height: coverage.height(),
            data,
        }
    }

    /// Width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Take ownership of the raw RGBA bytes
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// RGBA value of one pixel, `None` outside the buffer
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width {
            return None;
        }
        let start = (y * self.width + x) * 4;
        let bytes = self.data.get(start..start + 4)?;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(bytes);
        Some(rgba)
    }
}
