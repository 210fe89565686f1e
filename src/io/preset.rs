//! JSON parameter presets
//!
//! A preset is a serialized [`Parameters`] value. Missing fields take their
//! defaults, so a preset may name only what it changes.

use crate::io::configuration::PARAMS_EXTENSION;
use crate::io::error::{HalftoneError, Result};
use crate::io::export::ensure_parent;
use crate::params::Parameters;
use std::path::{Path, PathBuf};

/// Decode parameters from JSON text
///
/// # Errors
///
/// Returns an error if the text is not a valid preset
pub fn parse_preset(text: &str) -> Result<Parameters> {
    Ok(serde_json::from_str(text)?)
}

/// Read a preset file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not decode
pub fn load_preset(path: &Path) -> Result<Parameters> {
    let text = std::fs::read_to_string(path).map_err(|e| HalftoneError::FileSystem {
        path: path.to_path_buf(),
        operation: "read preset",
        source: e,
    })?;

    parse_preset(&text).map_err(|error| match error {
        HalftoneError::Preset { source, .. } => HalftoneError::Preset {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Write parameters as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if the parent directory or the file cannot be written
pub fn save_preset(params: &Parameters, path: &Path) -> Result<()> {
    let text = serde_json::to_string_pretty(params).map_err(|e| HalftoneError::Preset {
        path: path.to_path_buf(),
        source: e,
    })?;

    ensure_parent(path)?;
    std::fs::write(path, text).map_err(|e| HalftoneError::FileSystem {
        path: path.to_path_buf(),
        operation: "write preset",
        source: e,
    })
}

/// Sidecar path for the parameters of an output image
pub fn preset_path(output: &Path) -> PathBuf {
    output.with_extension(PARAMS_EXTENSION)
}
