//! Truck-type classification from bounding-box geometry

use crate::config::ClassifierConfig;
use crate::error::{Error, Result};
use crate::types::ClassificationResult;
use log::debug;
use std::collections::BTreeMap;

/// Maps bounding-box dimensions to a truck-type label and reference height.
///
/// Band edges and the height table come from [`ClassifierConfig`]; the
/// classifier never mutates them, so one instance can serve any number of
/// concurrent pipeline runs.
#[derive(Debug, Clone)]
pub struct TruckClassifier {
    config: ClassifierConfig,
}

impl Default for TruckClassifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

impl TruckClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Classify a detection by its bounding-box dimensions in pixels.
    ///
    /// Bands are evaluated largest threshold first; the first band whose
    /// threshold the height exceeds wins. A band with a wide variant picks
    /// it when the aspect ratio (width/height) is above the band's cutoff.
    pub fn classify(&self, bbox_width: f64, bbox_height: f64) -> Result<ClassificationResult> {
        if bbox_width <= 0.0 || bbox_height <= 0.0 {
            return Err(Error::InvalidDimension(format!(
                "bounding box must have positive dimensions, got {}x{}",
                bbox_width, bbox_height
            )));
        }

        let aspect_ratio = bbox_width / bbox_height;
        debug!(
            "classify: w={} h={} aspect={:.2}",
            bbox_width, bbox_height, aspect_ratio
        );

        let band = self
            .config
            .size_bands
            .iter()
            .find(|band| bbox_height > band.min_height_px)
            .ok_or_else(|| {
                Error::InvalidDimension(format!(
                    "no size band matches bbox height {}",
                    bbox_height
                ))
            })?;

        let label = match (&band.wide_label, band.wide_min_aspect) {
            (Some(wide), Some(min_aspect)) if aspect_ratio > min_aspect => wide,
            _ => &band.label,
        };

        let reference_height_m = self.reference_height(label)?;
        debug!("classified as {} ({} m)", label, reference_height_m);

        Ok(ClassificationResult {
            truck_type: label.clone(),
            reference_height_m,
        })
    }

    /// Reference height in meters for a truck-type label.
    pub fn reference_height(&self, label: &str) -> Result<f64> {
        self.config
            .truck_heights
            .get(label)
            .copied()
            .ok_or_else(|| Error::UnknownTruckType(label.to_string()))
    }

    /// Read-only snapshot of the truck-type table.
    pub fn truck_types(&self) -> &BTreeMap<String, f64> {
        &self.config.truck_heights
    }

    /// Whether a label is present in the truck-type table.
    pub fn is_supported(&self, label: &str) -> bool {
        self.config.truck_heights.contains_key(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SizeBand;

    fn classifier() -> TruckClassifier {
        TruckClassifier::default()
    }

    #[test]
    fn test_classify_large_wide_is_semi_trailer() {
        // h=320 > 300, aspect 800/320 = 2.5 > 2.0
        let result = classifier().classify(800.0, 320.0).unwrap();
        assert_eq!(result.truck_type, "Semi Trailer");
        assert_eq!(result.reference_height_m, 4.0);
    }

    #[test]
    fn test_classify_large_narrow_is_box_truck() {
        // h=320 > 300, aspect 400/320 = 1.25 <= 2.0
        let result = classifier().classify(400.0, 320.0).unwrap();
        assert_eq!(result.truck_type, "Box Truck");
        assert_eq!(result.reference_height_m, 3.5);
    }

    #[test]
    fn test_classify_medium_is_cube_van() {
        let result = classifier().classify(400.0, 250.0).unwrap();
        assert_eq!(result.truck_type, "Cube Van");
        assert_eq!(result.reference_height_m, 3.0);
    }

    #[test]
    fn test_classify_small_is_sprinter_van() {
        let result = classifier().classify(300.0, 150.0).unwrap();
        assert_eq!(result.truck_type, "Sprinter Van");
        assert_eq!(result.reference_height_m, 2.5);
    }

    #[test]
    fn test_classify_tiny_is_cargo_van() {
        let result = classifier().classify(120.0, 80.0).unwrap();
        assert_eq!(result.truck_type, "Cargo Van");
        assert_eq!(result.reference_height_m, 2.0);
    }

    #[test]
    fn test_band_edges_are_exclusive() {
        // Exactly at a threshold falls through to the band below
        let c = classifier();
        assert_eq!(c.classify(400.0, 300.0).unwrap().truck_type, "Cube Van");
        assert_eq!(c.classify(400.0, 200.0).unwrap().truck_type, "Sprinter Van");
        assert_eq!(c.classify(400.0, 100.0).unwrap().truck_type, "Cargo Van");
    }

    #[test]
    fn test_classify_is_deterministic() {
        let c = classifier();
        let a = c.classify(300.0, 200.0).unwrap();
        let b = c.classify(300.0, 200.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_classify_rejects_non_positive_dimensions() {
        let c = classifier();
        assert!(matches!(
            c.classify(0.0, 200.0),
            Err(Error::InvalidDimension(_))
        ));
        assert!(matches!(
            c.classify(300.0, 0.0),
            Err(Error::InvalidDimension(_))
        ));
        assert!(matches!(
            c.classify(300.0, -5.0),
            Err(Error::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_band_label_missing_from_table() {
        let config = ClassifierConfig {
            truck_heights: [("Box Truck".to_string(), 3.5)].into_iter().collect(),
            size_bands: vec![SizeBand {
                min_height_px: 0.0,
                label: "Flatbed".to_string(),
                wide_label: None,
                wide_min_aspect: None,
            }],
        };
        let c = TruckClassifier::new(config);
        assert!(matches!(
            c.classify(300.0, 200.0),
            Err(Error::UnknownTruckType(_))
        ));
    }

    #[test]
    fn test_custom_band_edges() {
        // Band edges are configuration: a table where 200px is a Box Truck
        let config = ClassifierConfig {
            truck_heights: [
                ("Box Truck".to_string(), 3.5),
                ("Cargo Van".to_string(), 2.0),
            ]
            .into_iter()
            .collect(),
            size_bands: vec![
                SizeBand {
                    min_height_px: 150.0,
                    label: "Box Truck".to_string(),
                    wide_label: None,
                    wide_min_aspect: None,
                },
                SizeBand {
                    min_height_px: 0.0,
                    label: "Cargo Van".to_string(),
                    wide_label: None,
                    wide_min_aspect: None,
                },
            ],
        };
        let c = TruckClassifier::new(config);
        let result = c.classify(300.0, 200.0).unwrap();
        assert_eq!(result.truck_type, "Box Truck");
        assert_eq!(result.reference_height_m, 3.5);
    }

    #[test]
    fn test_table_lookups() {
        let c = classifier();
        assert!(c.is_supported("Box Truck"));
        assert!(!c.is_supported("Monster Truck"));
        assert_eq!(c.reference_height("Cargo Van").unwrap(), 2.0);
        assert!(matches!(
            c.reference_height("Monster Truck"),
            Err(Error::UnknownTruckType(_))
        ));
        assert_eq!(c.truck_types().len(), 5);
    }
}
