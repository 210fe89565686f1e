//! Mathematical utilities shared by the field builders and halftone screens

/// Rotated screen coordinates and pixel addressing
pub mod geometry;
/// Clamping, interpolation and smoothstep curves
pub mod interpolation;
