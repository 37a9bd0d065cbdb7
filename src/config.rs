//! Configuration management for truck-measure
//!
//! Config stored at: ~/.config/truck-measure/config.json

use crate::cli::OutputFormat;
use crate::constants::{default_size_bands, default_truck_heights};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// One classification band: bounding boxes taller than `min_height_px`
/// (and not captured by a larger band) get `label`. A band may carry a
/// wide variant chosen when the box aspect ratio exceeds `wide_min_aspect`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeBand {
    pub min_height_px: f64,
    pub label: String,
    #[serde(default)]
    pub wide_label: Option<String>,
    #[serde(default)]
    pub wide_min_aspect: Option<f64>,
}

/// Truck-type table and band thresholds used by the classifier.
///
/// Constructed once at startup and passed in explicitly; read-only
/// afterwards, so independent pipeline runs can share it freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Truck-type label -> reference height in meters
    #[serde(default = "default_truck_heights")]
    pub truck_heights: BTreeMap<String, f64>,

    /// Size-threshold bands, largest threshold first
    #[serde(default = "default_size_bands")]
    pub size_bands: Vec<SizeBand>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            truck_heights: default_truck_heights(),
            size_bands: default_size_bands(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Classifier table and thresholds
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// External detector command printing detections as JSON
    #[serde(default)]
    pub detector_command: Option<String>,

    /// Minimum confidence kept from detector output
    #[serde(default = "default_min_confidence")]
    pub detector_min_confidence: f64,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Image resize factor applied before detection (1.0 = no resize)
    #[serde(default = "default_resize_scale")]
    pub resize_scale: f64,
}

fn default_min_confidence() -> f64 {
    0.25
}

fn default_resize_scale() -> f64 {
    1.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            detector_command: None,
            detector_min_confidence: default_min_confidence(),
            output_format: OutputFormat::default(),
            resize_scale: default_resize_scale(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("config directory not found".to_string()))?
            .join("truck-measure");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Truck Measure Configuration")?;
        writeln!(f, "===========================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Detector command: {}",
            self.detector_command.as_deref().unwrap_or("(not set)")
        )?;
        writeln!(f, "Min confidence:   {:.2}", self.detector_min_confidence)?;
        writeln!(f, "Output format:    {}", self.output_format)?;
        writeln!(f, "Resize scale:     {:.2}", self.resize_scale)?;
        writeln!(f)?;
        writeln!(f, "Truck types:")?;
        for (label, height) in &self.classifier.truck_heights {
            writeln!(f, "  {:<14} {:.2} m", label, height)?;
        }

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:      {}", path.display())?;
        }

        Ok(())
    }
}
