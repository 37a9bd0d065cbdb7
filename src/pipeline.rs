//! Measurement pipeline
//!
//! Sequences detect -> classify -> scale -> convert and returns a full
//! measurement record, or the first stage failure. No retries: the caller
//! decides whether to re-run with adjusted inputs (different resize scale,
//! different region).

use crate::config::ClassifierConfig;
use crate::detector::{best_detection, Detector};
use crate::domain::{classifier::TruckClassifier, converter, scale};
use crate::error::{Error, Result, Stage};
use crate::types::{MeasurementRecord, Region};
use log::{debug, info};
use std::path::Path;

/// Orchestrates one measurement run.
///
/// Holds only the immutable classifier configuration; each `run` is a pure
/// function of its inputs, so independent runs can execute concurrently.
pub struct MeasurementPipeline {
    classifier: TruckClassifier,
}

impl Default for MeasurementPipeline {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

impl MeasurementPipeline {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            classifier: TruckClassifier::new(config),
        }
    }

    pub fn classifier(&self) -> &TruckClassifier {
        &self.classifier
    }

    /// Run the full pipeline on one image.
    ///
    /// The region must be in the same coordinate frame as the image handed
    /// to the detector. With no region, the truck bounding box itself is
    /// measured.
    pub fn run(
        &self,
        detector: &dyn Detector,
        image: &Path,
        region: Option<Region>,
    ) -> Result<MeasurementRecord> {
        // Detect
        let detections = detector
            .detect(image)
            .map_err(|e| e.at_stage(Stage::Detect))?;
        let best = best_detection(&detections)
            .ok_or_else(|| Error::NoTruckDetected.at_stage(Stage::Detect))?;
        debug!(
            "best of {} detection(s): conf={:.2}",
            detections.len(),
            best.confidence
        );

        // Classify
        let classification = self
            .classifier
            .classify(best.bbox.width(), best.bbox.height())
            .map_err(|e| e.at_stage(Stage::Classify))?;

        // Scale
        let scale_factor = scale::estimate_scale(&best.bbox, classification.reference_height_m)
            .map_err(|e| e.at_stage(Stage::Scale))?;

        // Convert
        let region = region.unwrap_or_else(|| best.bbox.as_region());
        let measurement = converter::convert(&region, scale_factor)
            .map_err(|e| e.at_stage(Stage::Convert))?;

        info!(
            "{} (conf {:.2}): {:.2}m x {:.2}m",
            classification.truck_type, best.confidence, measurement.width_m, measurement.height_m
        );

        Ok(MeasurementRecord {
            truck_type: classification.truck_type,
            reference_height_m: classification.reference_height_m,
            confidence: best.confidence,
            meters_per_pixel: scale_factor.meters_per_pixel,
            width_m: measurement.width_m,
            height_m: measurement.height_m,
            measured_at: chrono::Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::FixtureDetector;
    use crate::types::{BoundingBox, Detection};

    fn single_truck() -> FixtureDetector {
        FixtureDetector::new(vec![Detection {
            bbox: BoundingBox::new(0.0, 0.0, 300.0, 200.0).unwrap(),
            confidence: 0.9,
        }])
    }

    #[test]
    fn test_run_with_region() {
        let pipeline = MeasurementPipeline::default();
        let record = pipeline
            .run(
                &single_truck(),
                Path::new("truck.jpg"),
                Some(Region::new(10.0, 20.0, 100.0, 50.0)),
            )
            .unwrap();

        // 200px box -> Sprinter Van (2.5m) -> 0.0125 m/px
        assert_eq!(record.truck_type, "Sprinter Van");
        assert!((record.meters_per_pixel - 0.0125).abs() < 1e-12);
        assert!((record.width_m - 1.25).abs() < 1e-12);
        assert!((record.height_m - 0.625).abs() < 1e-12);
        assert_eq!(record.confidence, 0.9);
    }

    #[test]
    fn test_run_without_region_measures_truck_bbox() {
        let pipeline = MeasurementPipeline::default();
        let record = pipeline
            .run(&single_truck(), Path::new("truck.jpg"), None)
            .unwrap();

        // The bbox measured against its own scale reproduces the reference height
        assert!((record.height_m - record.reference_height_m).abs() < 1e-9);
    }

    #[test]
    fn test_empty_detections_fail_at_detect_stage() {
        let pipeline = MeasurementPipeline::default();
        let err = pipeline
            .run(&FixtureDetector::default(), Path::new("truck.jpg"), None)
            .unwrap_err();

        assert_eq!(err.failed_stage(), Some(Stage::Detect));
        assert!(matches!(
            err,
            Error::Stage { source, .. } if matches!(*source, Error::NoTruckDetected)
        ));
    }

    #[test]
    fn test_bad_region_fails_at_convert_stage() {
        let pipeline = MeasurementPipeline::default();
        let err = pipeline
            .run(
                &single_truck(),
                Path::new("truck.jpg"),
                Some(Region::new(0.0, 0.0, 0.0, 50.0)),
            )
            .unwrap_err();

        assert_eq!(err.failed_stage(), Some(Stage::Convert));
    }
}
