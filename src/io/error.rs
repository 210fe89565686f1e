//! Error types for the boundary operations around the rendering core
//!
//! Rendering itself is total. Only parsing user input and touching the
//! filesystem can fail, and those failures are reported through [`HalftoneError`].

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for parameter parsing and file output
#[derive(Debug)]
pub enum HalftoneError {
    /// A parameter value could not be parsed or is outside its accepted domain
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Requested canvas is empty or exceeds the supported size
    InvalidDimensions {
        /// Requested width in pixels
        width: usize,
        /// Requested height in pixels
        height: usize,
    },

    /// A parameter preset could not be decoded
    Preset {
        /// Path of the preset file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Failed to encode or save a raster image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for HalftoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidDimensions { width, height } => {
                write!(f, "Invalid canvas dimensions {width}x{height}")
            }
            Self::Preset { path, source } => {
                write!(f, "Failed to read preset '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for HalftoneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Preset { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidParameter { .. } | Self::InvalidDimensions { .. } => None,
        }
    }
}

/// Convenience type alias for fallible boundary operations
pub type Result<T> = std::result::Result<T, HalftoneError>;

impl From<image::ImageError> for HalftoneError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for HalftoneError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for HalftoneError {
    fn from(err: serde_json::Error) -> Self {
        Self::Preset {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> HalftoneError {
    HalftoneError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an error for an output path the tool cannot use
pub fn path_error(path: &Path, reason: &str) -> HalftoneError {
    HalftoneError::InvalidParameter {
        parameter: "output",
        value: path.display().to_string(),
        reason: reason.to_string(),
    }
}
