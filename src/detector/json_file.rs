//! Detector backed by a sidecar JSON file
//!
//! For batch workflows where detection already ran elsewhere: the file
//! holds the same JSON array the command detector reads from stdout. The
//! coordinates must be in the frame of the image being measured.

use super::{parse_detections, Detector};
use crate::error::{Error, Result};
use crate::types::Detection;
use std::path::{Path, PathBuf};

pub struct JsonFileDetector {
    path: PathBuf,
    min_confidence: f64,
}

impl JsonFileDetector {
    pub fn new(path: impl Into<PathBuf>, min_confidence: f64) -> Self {
        Self {
            path: path.into(),
            min_confidence,
        }
    }
}

impl Detector for JsonFileDetector {
    fn detect(&self, _image: &Path) -> Result<Vec<Detection>> {
        if !self.path.exists() {
            return Err(Error::FileNotFound(self.path.display().to_string()));
        }
        let content = std::fs::read_to_string(&self.path)?;
        parse_detections(&content, self.min_confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_detections_from_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"bbox": [0, 0, 300, 200], "confidence": 0.88}}]"#
        )
        .unwrap();

        let detector = JsonFileDetector::new(file.path(), 0.25);
        let detections = detector.detect(Path::new("ignored.jpg")).unwrap();
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].bbox.width(), 300.0);
    }

    #[test]
    fn test_missing_file() {
        let detector = JsonFileDetector::new("/no/such/detections.json", 0.25);
        let result = detector.detect(Path::new("ignored.jpg"));
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }
}
