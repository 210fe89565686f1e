//! PNG and SVG file output

use crate::io::error::{HalftoneError, Result};
use crate::raster::PixelBuffer;
use crate::vector::VectorDocument;
use image::{ImageFormat, RgbaImage};
use std::path::Path;

/// Create the parent directory of an output path if it is missing
///
/// # Errors
///
/// Returns an error if the directory cannot be created
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| HalftoneError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}

/// Save an RGBA buffer as a PNG image, whatever the path's extension
///
/// # Errors
///
/// Returns an error if:
/// - The buffer dimensions do not fit the PNG encoder
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_png(buffer: PixelBuffer, path: &Path) -> Result<()> {
    let (width, height) = (buffer.width(), buffer.height());
    let invalid = || HalftoneError::InvalidDimensions { width, height };

    let image = u32::try_from(width)
        .ok()
        .zip(u32::try_from(height).ok())
        .and_then(|(w, h)| RgbaImage::from_raw(w, h, buffer.into_raw()))
        .ok_or_else(invalid)?;

    ensure_parent(path)?;
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| HalftoneError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Write a vector scene as an SVG file
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file cannot be written
pub fn save_svg(document: &VectorDocument, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    std::fs::write(path, document.to_svg()).map_err(|e| HalftoneError::FileSystem {
        path: path.to_path_buf(),
        operation: "write svg",
        source: e,
    })
}
