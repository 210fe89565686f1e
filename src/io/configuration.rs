//! Rendering constants and runtime configuration defaults

// Seed offsets keep the auxiliary noise instances uncorrelated with the source noise
/// Offset added to the base seed for the domain-warp noise instance
pub const WARP_SEED_OFFSET: i64 = 7919;
/// Offset added to the base seed for the mask noise instance
pub const MASK_SEED_OFFSET: i64 = 31_337;

/// Frequency multiplier applied to coordinates before the warp sample
pub const WARP_FREQUENCY: f64 = 0.8;
/// Coordinate shift for the second warp sample
pub const WARP_OFFSET: f64 = 100.0;

/// Weight of the base octave in the mask noise blend
pub const MASK_PRIMARY_WEIGHT: f64 = 0.7;
/// Weight of the detail octave in the mask noise blend
pub const MASK_DETAIL_WEIGHT: f64 = 0.3;
/// Frequency multiplier of the mask detail octave
pub const MASK_DETAIL_FREQUENCY: f64 = 2.3;

// Periods below two pixels cannot hold a visible bar
/// Minimum halftone period and along-cell size in pixels
pub const MIN_PERIOD: f64 = 2.0;
/// Lower bound for halftone frequency to keep periods finite
pub const MIN_FREQUENCY: f64 = 0.01;
/// Upper bound for noise octave count
pub const MAX_OCTAVES: u32 = 16;

/// Bars narrower than this many pixels are omitted from vector output
pub const MIN_VECTOR_BAR_WIDTH: f64 = 0.5;
/// Shapes with a normalized size at or below this are omitted from vector output
pub const MIN_VECTOR_SHAPE_SIZE: f64 = 0.01;
/// Maximum number of centerline samples kept per ribbon segment
pub const MAX_SEGMENT_SAMPLES: usize = 400;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: usize = 16_384;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: i64 = 500;
/// Default canvas width in pixels
pub const DEFAULT_WIDTH: usize = 1200;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: usize = 800;

/// Default noise scale relative to the shorter canvas side
pub const DEFAULT_NOISE_SCALE: f64 = 3.0;
/// Default number of fractal octaves
pub const DEFAULT_OCTAVES: u32 = 3;
/// Default amplitude decay per octave
pub const DEFAULT_PERSISTENCE: f64 = 0.5;
/// Default contrast stretch around mid gray
pub const DEFAULT_CONTRAST: f64 = 1.0;
/// Default brightness shift in display units
pub const DEFAULT_BRIGHTNESS: f64 = 0.0;
/// Default domain warp strength
pub const DEFAULT_WARP_AMOUNT: f64 = 1.5;

/// Default gradient direction in degrees
pub const DEFAULT_GRADIENT_DIRECTION: f64 = 0.0;
/// Default gradient window start in percent
pub const DEFAULT_GRADIENT_START: f64 = 0.0;
/// Default gradient window end in percent
pub const DEFAULT_GRADIENT_END: f64 = 100.0;
/// Default gradient falloff exponent
pub const DEFAULT_GRADIENT_CURVE: f64 = 1.0;

/// Default blend factor between noise and gradient
pub const DEFAULT_BLEND_MIX: f64 = 0.5;

/// Default number of halftone lines across the canvas width
pub const DEFAULT_FREQUENCY: f64 = 40.0;
/// Default halftone screen angle in degrees
pub const DEFAULT_ANGLE: f64 = 90.0;
/// Default ink thickness multiplier
pub const DEFAULT_THICKNESS: f64 = 1.0;
/// Default along-line cell length relative to the period
pub const DEFAULT_CELL_SIZE: f64 = 2.0;
/// Default ink color
pub const DEFAULT_FOREGROUND: [u8; 3] = [0xff, 0x00, 0x00];
/// Default paper color
pub const DEFAULT_BACKGROUND: [u8; 3] = [0xc8, 0xc0, 0xb8];

/// Default mask noise scale
pub const DEFAULT_MASK_SCALE: f64 = 1.0;
/// Default mask threshold center
pub const DEFAULT_MASK_THRESHOLD: f64 = 0.45;
/// Default half-width of the mask threshold band
pub const DEFAULT_MASK_SOFTNESS: f64 = 0.1;
/// Default vertical bias of the mask
pub const DEFAULT_MASK_VERTICAL_BIAS: f64 = 0.5;
/// Default edge fade distance of the mask
pub const DEFAULT_MASK_EDGE_FADE: f64 = 0.3;

/// Exclusive upper bound for randomly chosen seeds
pub const RANDOM_SEED_RANGE: i64 = 10_000;

// Output settings
/// Prefix of generated output filenames
pub const OUTPUT_PREFIX: &str = "halftone-pattern";
/// Extension of the sidecar parameter dump
pub const PARAMS_EXTENSION: &str = "json";
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
