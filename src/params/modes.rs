//! Closed mode selectors and the rasterization dispatch variant

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which synthetic field feeds the halftone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// Fractal simplex noise
    #[default]
    Noise,
    /// Directional linear gradient
    Gradient,
    /// Noise and gradient combined with a blend operator
    Both,
}

/// Whether intensity is quantized per cell or sampled per pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// One sample per cell, producing uniform digitized segments
    #[default]
    Stepped,
    /// One sample per pixel, producing continuously varying widths
    Smooth,
}

/// Noise flavour used by the source field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NoiseVariant {
    /// Plain fractal sum
    #[default]
    Perlin,
    /// Valleys folded into sharp ridges
    Ridged,
    /// Coordinates distorted by a second noise instance
    Warp,
}

/// Operator combining noise and gradient in [`SourceMode::Both`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    /// `n * g`
    #[default]
    Multiply,
    /// Mix plus a product term, capped at one
    Add,
    /// Linear interpolation by the mix factor
    Mix,
}

/// Halftone element requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HalftoneShape {
    /// Parallel bars
    #[default]
    Line,
    /// Axis-aligned squares in the rotated frame
    Square,
    /// Round dots
    Circle,
    /// Squares rotated by 45 degrees
    Diamond,
    /// Dots twice as wide as they are tall
    Ellipse,
    /// Plus-shaped marks
    Cross,
    /// Per-pixel hashed threshold, no geometric grid
    Dither,
}

/// Shapes drawn once per square cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellShape {
    /// Chebyshev half-extent test
    Square,
    /// Euclidean radius test
    Circle,
    /// Manhattan half-extent test
    Diamond,
    /// Quadratic form with the vertical radius half the horizontal one
    Ellipse,
    /// Union of two perpendicular arms
    Cross,
}

/// The single rasterization path a render request executes
///
/// Dither wins over everything, any cell shape wins over the render mode,
/// and only lines consult the render mode to pick stepped or smooth bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Hashed per-pixel threshold
    Dither,
    /// Shape per rotated square cell
    Cell {
        /// Shape tested inside each cell
        shape: CellShape,
        /// Per-cell or per-pixel intensity sampling
        sampling: RenderMode,
    },
    /// Bars quantized into a grid of cells
    SteppedLine,
    /// Bars whose width follows every pixel
    SmoothLine,
}

impl Strategy {
    /// Resolve the rasterization path for a shape and render mode
    pub const fn resolve(shape: HalftoneShape, render_mode: RenderMode) -> Self {
        match shape {
            HalftoneShape::Dither => Self::Dither,
            HalftoneShape::Line => match render_mode {
                RenderMode::Stepped => Self::SteppedLine,
                RenderMode::Smooth => Self::SmoothLine,
            },
            HalftoneShape::Square => Self::cell(CellShape::Square, render_mode),
            HalftoneShape::Circle => Self::cell(CellShape::Circle, render_mode),
            HalftoneShape::Diamond => Self::cell(CellShape::Diamond, render_mode),
            HalftoneShape::Ellipse => Self::cell(CellShape::Ellipse, render_mode),
            HalftoneShape::Cross => Self::cell(CellShape::Cross, render_mode),
        }
    }

    const fn cell(shape: CellShape, sampling: RenderMode) -> Self {
        Self::Cell { shape, sampling }
    }
}
