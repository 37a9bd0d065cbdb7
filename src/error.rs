//! Error types for truck-measure

use thiserror::Error;

/// Pipeline stage names, used when reporting where a run failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Detect,
    Classify,
    Scale,
    Convert,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Detect => write!(f, "detect"),
            Stage::Classify => write!(f, "classify"),
            Stage::Scale => write!(f, "scale"),
            Stage::Convert => write!(f, "convert"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid image format: {0}")]
    InvalidImageFormat(String),

    #[error("Detector error: {0}")]
    Detector(String),

    #[error("No truck detected in image")]
    NoTruckDetected,

    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("Unknown truck type: {0}")]
    UnknownTruckType(String),

    #[error("{stage} stage failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap an error with the pipeline stage it occurred in.
    pub fn at_stage(self, stage: Stage) -> Self {
        Error::Stage {
            stage,
            source: Box::new(self),
        }
    }

    /// The stage a wrapped pipeline error failed at, if any.
    pub fn failed_stage(&self) -> Option<Stage> {
        match self {
            Error::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
