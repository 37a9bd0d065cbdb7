//! Image validation and loading

use crate::error::{Error, Result};
use image::DynamicImage;
use log::debug;
use std::path::Path;

/// Supported image extensions
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp"];

/// Check if a path is a supported image file
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Validate an image file exists and looks like an image
pub fn validate_image(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    if !path.is_file() {
        return Err(Error::InvalidImageFormat(format!(
            "{} is not a file",
            path.display()
        )));
    }

    if !is_supported_image(path) {
        return Err(Error::InvalidImageFormat(format!(
            "Unsupported image format: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Get image dimensions without decoding the full image
pub fn get_image_dimensions(path: &Path) -> Result<(u32, u32)> {
    let dims = image::image_dimensions(path)?;
    Ok(dims)
}

/// Load an image, optionally resized by a uniform factor.
///
/// Resizing changes the pixel coordinate frame: detection and region
/// selection must both happen on the resized image.
pub fn load_image(path: &Path, resize_scale: f64) -> Result<DynamicImage> {
    validate_image(path)?;
    let img = image::open(path)?;

    if resize_scale <= 0.0 {
        return Err(Error::InvalidDimension(format!(
            "resize scale must be positive, got {}",
            resize_scale
        )));
    }

    if (resize_scale - 1.0).abs() < f64::EPSILON {
        return Ok(img);
    }

    let width = (img.width() as f64 * resize_scale).round().max(1.0) as u32;
    let height = (img.height() as f64 * resize_scale).round().max(1.0) as u32;
    debug!(
        "resizing {}x{} -> {}x{} (scale {})",
        img.width(),
        img.height(),
        width,
        height,
        resize_scale
    );
    Ok(img.resize_exact(width, height, image::imageops::FilterType::Triangle))
}
