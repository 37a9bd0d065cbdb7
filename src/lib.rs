//! Truck Measure Library
//!
//! Estimates real-world dimensions of a region on a photographed truck by
//! combining a detector bounding box with a known reference height for the
//! classified truck type.

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod detector;
pub mod domain;
pub mod error;
pub mod export;
pub mod output;
pub mod pipeline;
pub mod scanner;
pub mod types;
