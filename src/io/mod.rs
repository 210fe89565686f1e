//! Boundary operations around the pure rendering core

/// Command-line arguments and batch orchestration
pub mod cli;
/// Rendering constants and defaults
pub mod configuration;
/// Error types for parsing and file output
pub mod error;
/// PNG and SVG file output
pub mod export;
/// JSON parameter presets
pub mod preset;
/// Progress display for multi-image runs
pub mod progress;
