//! Pixel-to-metric scale derivation
//!
//! The scale is meters per pixel: multiply a pixel length by it to get
//! meters. A scale is only meaningful for the image that produced the
//! bounding box it was derived from.

use crate::error::{Error, Result};
use crate::types::{BoundingBox, ScaleFactor};
use log::debug;

/// Derive a scale factor from a truck bounding box and its reference height.
///
/// # Formula
/// scale = reference_height_m / bbox pixel height
pub fn estimate_scale(bbox: &BoundingBox, reference_height_m: f64) -> Result<ScaleFactor> {
    let meters_per_pixel = scale_from_reference(bbox.height(), reference_height_m)?;
    debug!(
        "scale: {:.6} m/px (bbox_px_h={}, ref_h={})",
        meters_per_pixel,
        bbox.height(),
        reference_height_m
    );
    Ok(ScaleFactor { meters_per_pixel })
}

/// Generic scale derivation from any known reference length.
///
/// Usable when the reference is not a truck height, e.g. a calibration
/// object of known size in the frame.
pub fn scale_from_reference(reference_pixels: f64, reference_meters: f64) -> Result<f64> {
    if reference_pixels <= 0.0 || reference_meters <= 0.0 {
        return Err(Error::InvalidDimension(format!(
            "reference dimensions must be positive, got {} px / {} m",
            reference_pixels, reference_meters
        )));
    }
    Ok(reference_meters / reference_pixels)
}
