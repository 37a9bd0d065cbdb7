//! Detector boundary
//!
//! The neural detector is an external collaborator: anything that can
//! produce bounding boxes with confidence scores for an image. The trait
//! keeps the measurement core testable with a deterministic fixture.

mod command;
mod json_file;

pub use command::CommandDetector;
pub use json_file::JsonFileDetector;

use crate::error::Result;
use crate::types::{BoundingBox, Detection};
use serde::Deserialize;
use std::path::Path;

/// Produces truck detections for an image.
///
/// Output order is meaningful: confidence ties are broken by position.
pub trait Detector {
    fn detect(&self, image: &Path) -> Result<Vec<Detection>>;
}

/// Fixed detections, for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct FixtureDetector {
    pub detections: Vec<Detection>,
}

impl FixtureDetector {
    pub fn new(detections: Vec<Detection>) -> Self {
        Self { detections }
    }
}

impl Detector for FixtureDetector {
    fn detect(&self, _image: &Path) -> Result<Vec<Detection>> {
        Ok(self.detections.clone())
    }
}

/// Pick the highest-confidence detection; ties keep the first in
/// detector output order.
pub fn best_detection(detections: &[Detection]) -> Option<&Detection> {
    detections.iter().reduce(|best, candidate| {
        if candidate.confidence > best.confidence {
            candidate
        } else {
            best
        }
    })
}

/// Detection as emitted on the wire: `{"bbox": [x1,y1,x2,y2], "confidence": c}`
#[derive(Debug, Deserialize)]
struct RawDetection {
    bbox: [f64; 4],
    confidence: f64,
}

/// Parse a JSON array of raw detections, dropping those below `min_confidence`.
fn parse_detections(json: &str, min_confidence: f64) -> Result<Vec<Detection>> {
    let raw: Vec<RawDetection> = serde_json::from_str(json)?;

    let mut detections = Vec::with_capacity(raw.len());
    for r in raw {
        if r.confidence < min_confidence {
            continue;
        }
        let [x1, y1, x2, y2] = r.bbox;
        detections.push(Detection {
            bbox: BoundingBox::new(x1, y1, x2, y2)?,
            confidence: r.confidence,
        });
    }
    Ok(detections)
}

/// Extract the JSON array from raw command output (tolerates log lines
/// around it).
fn extract_json_array(output: &str) -> &str {
    let output = output.trim();
    match (output.find('['), output.rfind(']')) {
        (Some(start), Some(end)) if start < end => &output[start..=end],
        _ => output,
    }
}
