//! The parameter structure that fully determines a render
//!
//! A [`Parameters`] value is the only input besides the canvas size. It carries
//! no hidden state, so two renders with equal parameters produce equal output.
//! Every group deserializes with defaults for missing fields, which lets a
//! partial JSON preset override only what it names.

/// Opaque RGB colors and their `#rrggbb` form
pub mod color;
/// Mode selectors and the rasterization dispatch variant
pub mod modes;

pub use color::Color;
pub use modes::{BlendMode, CellShape, HalftoneShape, NoiseVariant, RenderMode, SourceMode, Strategy};

use crate::io::configuration::{
    DEFAULT_ANGLE, DEFAULT_BACKGROUND, DEFAULT_BLEND_MIX, DEFAULT_BRIGHTNESS, DEFAULT_CELL_SIZE,
    DEFAULT_CONTRAST, DEFAULT_FOREGROUND, DEFAULT_FREQUENCY, DEFAULT_GRADIENT_CURVE,
    DEFAULT_GRADIENT_DIRECTION, DEFAULT_GRADIENT_END, DEFAULT_GRADIENT_START, DEFAULT_MASK_EDGE_FADE,
    DEFAULT_MASK_SCALE, DEFAULT_MASK_SOFTNESS, DEFAULT_MASK_THRESHOLD, DEFAULT_MASK_VERTICAL_BIAS,
    DEFAULT_NOISE_SCALE, DEFAULT_OCTAVES, DEFAULT_PERSISTENCE, DEFAULT_SEED, DEFAULT_THICKNESS,
    DEFAULT_WARP_AMOUNT,
};
use serde::{Deserialize, Serialize};

/// Noise synthesis settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParams {
    /// Base seed shared by every noise instance and the dither hash
    pub seed: i64,
    /// Feature density relative to the shorter canvas side
    pub scale: f64,
    /// Number of fractal layers
    pub octaves: u32,
    /// Amplitude decay per octave
    pub persistence: f64,
    /// Linear stretch around mid gray
    pub contrast: f64,
    /// Additive shift in display units (0-255 scale)
    pub brightness: f64,
    /// Plain, ridged or domain-warped noise
    pub variant: NoiseVariant,
    /// Strength of the domain warp
    pub warp_amount: f64,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            scale: DEFAULT_NOISE_SCALE,
            octaves: DEFAULT_OCTAVES,
            persistence: DEFAULT_PERSISTENCE,
            contrast: DEFAULT_CONTRAST,
            brightness: DEFAULT_BRIGHTNESS,
            variant: NoiseVariant::default(),
            warp_amount: DEFAULT_WARP_AMOUNT,
        }
    }
}

/// Directional gradient settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientParams {
    /// Direction in degrees, 0 runs left to right and 90 top to bottom
    pub direction: f64,
    /// Window start in percent of the projected span
    pub start: f64,
    /// Window end in percent of the projected span
    pub end: f64,
    /// Falloff exponent applied after windowing
    pub curve: f64,
}

impl Default for GradientParams {
    fn default() -> Self {
        Self {
            direction: DEFAULT_GRADIENT_DIRECTION,
            start: DEFAULT_GRADIENT_START,
            end: DEFAULT_GRADIENT_END,
            curve: DEFAULT_GRADIENT_CURVE,
        }
    }
}

/// How noise and gradient combine in [`SourceMode::Both`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendParams {
    /// Weight of the gradient
    pub mix: f64,
    /// Blend operator
    pub mode: BlendMode,
}

impl Default for BlendParams {
    fn default() -> Self {
        Self {
            mix: DEFAULT_BLEND_MIX,
            mode: BlendMode::default(),
        }
    }
}

/// Halftone screen and output color settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HalftoneParams {
    /// Number of periods across the canvas width
    pub frequency: f64,
    /// Screen rotation in degrees
    pub angle: f64,
    /// Ink amount multiplier
    pub thickness: f64,
    /// Along-line cell length as a multiple of the period (stepped lines)
    pub cell_size: f64,
    /// Halftone element
    pub shape: HalftoneShape,
    /// Ink color
    pub foreground: Color,
    /// Paper color
    pub background: Color,
    /// Swap ink and paper and treat brightness as ink
    pub invert: bool,
    /// Leave the paper fully transparent
    pub transparent: bool,
}

impl Default for HalftoneParams {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            angle: DEFAULT_ANGLE,
            thickness: DEFAULT_THICKNESS,
            cell_size: DEFAULT_CELL_SIZE,
            shape: HalftoneShape::default(),
            foreground: Color::from_rgb(DEFAULT_FOREGROUND),
            background: Color::from_rgb(DEFAULT_BACKGROUND),
            invert: false,
            transparent: false,
        }
    }
}

/// Soft spatial mask settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskParams {
    /// Whether the mask attenuates darkness at all
    pub enabled: bool,
    /// Mask noise scale
    pub scale: f64,
    /// Center of the smoothstep band
    pub threshold: f64,
    /// Half-width of the smoothstep band
    pub softness: f64,
    /// Fade toward the top of the canvas, 0 disables
    pub vertical_bias: f64,
    /// Normalized edge distance over which the mask fades in, 0 disables
    pub edge_fade: f64,
}

impl Default for MaskParams {
    fn default() -> Self {
        Self {
            enabled: false,
            scale: DEFAULT_MASK_SCALE,
            threshold: DEFAULT_MASK_THRESHOLD,
            softness: DEFAULT_MASK_SOFTNESS,
            vertical_bias: DEFAULT_MASK_VERTICAL_BIAS,
            edge_fade: DEFAULT_MASK_EDGE_FADE,
        }
    }
}

/// Complete configuration of a render
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Which synthetic field feeds the halftone
    pub source_mode: SourceMode,
    /// Per-cell or per-pixel sampling
    pub render_mode: RenderMode,
    /// Noise settings
    pub noise: NoiseParams,
    /// Gradient settings
    pub gradient: GradientParams,
    /// Noise/gradient blend settings
    pub blend: BlendParams,
    /// Halftone screen settings
    pub halftone: HalftoneParams,
    /// Mask settings
    pub mask: MaskParams,
}

impl Parameters {
    /// The rasterization path these parameters select
    pub const fn strategy(&self) -> Strategy {
        Strategy::resolve(self.halftone.shape, self.render_mode)
    }
}
