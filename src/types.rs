//! Core types for truck measurement

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in pixel coordinates.
///
/// Produced by the detector; immutable once created. `x2 > x1` and
/// `y2 > y1` are enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BoundingBox {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self> {
        if x2 <= x1 || y2 <= y1 {
            return Err(Error::InvalidDimension(format!(
                "degenerate bounding box ({}, {}, {}, {})",
                x1, y1, x2, y2
            )));
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// Pixel width (x2 - x1).
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Pixel height (y2 - y1).
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// The box itself as a measurable region.
    pub fn as_region(&self) -> Region {
        Region {
            x: self.x1,
            y: self.y1,
            width: self.width(),
            height: self.height(),
        }
    }
}

/// A single detector hit: bounding box plus confidence in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub bbox: BoundingBox,
    pub confidence: f64,
}

/// A pixel rectangle selected for measurement.
///
/// Must share the coordinate frame (same image, same resolution) of the
/// detection used to derive the scale. Width/height are validated when
/// the region is converted, not at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Meters-per-pixel conversion ratio.
///
/// Valid only for the image/viewpoint that produced the bounding box it
/// was derived from; never cache across images.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactor {
    pub meters_per_pixel: f64,
}

/// Truck-type label plus its reference height, derived from one bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub truck_type: String,
    pub reference_height_m: f64,
}

/// Metric dimensions of a converted region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementResult {
    pub width_m: f64,
    pub height_m: f64,
}

/// Full pipeline output handed to result consumers (printer, CSV/JSON export).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Classified truck-type label
    pub truck_type: String,
    /// Reference height used for scaling (meters)
    pub reference_height_m: f64,
    /// Confidence of the detection that anchored the scale
    pub confidence: f64,
    /// Derived scale (meters per pixel)
    pub meters_per_pixel: f64,
    /// Measured region width (meters)
    pub width_m: f64,
    /// Measured region height (meters)
    pub height_m: f64,
    /// When the measurement was taken
    pub measured_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_dimensions() {
        let bbox = BoundingBox::new(0.0, 0.0, 300.0, 200.0).unwrap();
        assert_eq!(bbox.width(), 300.0);
        assert_eq!(bbox.height(), 200.0);
    }

    #[test]
    fn test_bounding_box_rejects_degenerate() {
        assert!(BoundingBox::new(10.0, 0.0, 10.0, 200.0).is_err());
        assert!(BoundingBox::new(0.0, 200.0, 300.0, 100.0).is_err());
    }

    #[test]
    fn test_bbox_as_region() {
        let bbox = BoundingBox::new(50.0, 60.0, 350.0, 260.0).unwrap();
        let region = bbox.as_region();
        assert_eq!(region.x, 50.0);
        assert_eq!(region.y, 60.0);
        assert_eq!(region.width, 300.0);
        assert_eq!(region.height, 200.0);
    }
}
