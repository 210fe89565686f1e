//! Deterministic noise sources
//!
//! Each builder constructs its own [`SimplexNoise`] from an explicit seed; no
//! instance is shared between renders.

/// Per-pixel integer hash thresholds
pub mod hash;
/// Seeded simplex noise sampler
pub mod simplex;

pub use hash::pixel_threshold;
pub use simplex::SimplexNoise;
