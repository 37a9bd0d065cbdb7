//! Detector backed by an external detection command
//!
//! Runs a configured command (typically a YOLO wrapper script) with the
//! image path appended and reads detections as a JSON array from stdout:
//! `[{"bbox": [x1, y1, x2, y2], "confidence": 0.91}, ...]`

use super::{extract_json_array, parse_detections, Detector};
use crate::error::{Error, Result};
use crate::types::Detection;
use log::{debug, warn};
use std::path::Path;
use std::process::Command;

pub struct CommandDetector {
    command: String,
    min_confidence: f64,
}

impl CommandDetector {
    pub fn new(command: impl Into<String>, min_confidence: f64) -> Self {
        Self {
            command: command.into(),
            min_confidence,
        }
    }
}

impl Detector for CommandDetector {
    fn detect(&self, image: &Path) -> Result<Vec<Detection>> {
        let mut parts = shell_words::split(&self.command)
            .map_err(|e| Error::Config(format!("invalid detector command: {}", e)))?;
        if parts.is_empty() {
            return Err(Error::Config("detector command is empty".to_string()));
        }

        let program = parts.remove(0);
        debug!("running detector: {} {:?} {}", program, parts, image.display());

        let output = Command::new(&program)
            .args(&parts)
            .arg(image)
            .output()
            .map_err(|e| Error::Detector(format!("failed to run {}: {}", program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Detector(format!(
                "{} exited with {}: {}",
                program,
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.trim().is_empty() {
            warn!("detector produced no output");
            return Ok(Vec::new());
        }

        let detections = parse_detections(extract_json_array(&stdout), self.min_confidence)?;
        debug!("detector found {} truck(s)", detections.len());
        Ok(detections)
    }
}
