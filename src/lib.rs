//! Procedural halftone pattern generator
//!
//! A [`Parameters`] value and a canvas size fully determine the output. Seeded
//! simplex noise, a directional gradient, or a blend of both forms a source
//! intensity field, an optional mask attenuates it, and one of four halftone
//! screens turns the result into ink: stepped bars, smooth bars, shapes per
//! cell, or a hashed dither. The same pipeline produces either an RGBA buffer
//! through [`render`] or a scene of vector primitives through [`export_vector`].

#![forbid(unsafe_code)]

/// Source and mask intensity fields
pub mod field;
/// Command line, presets, file export, configuration and error handling
pub mod io;
/// Rotation, pixel addressing and interpolation helpers
pub mod math;
/// Seeded simplex noise and per-pixel hashing
pub mod noise;
/// The parameter structure and its mode selectors
pub mod params;
/// Halftone rasterizers and the RGBA output buffer
pub mod raster;
/// Vector extraction and SVG serialization
pub mod vector;

pub use io::error::{HalftoneError, Result};
pub use params::Parameters;
pub use raster::{PixelBuffer, render};
pub use vector::{VectorDocument, export_vector};
