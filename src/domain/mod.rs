//! Measurement core: classification, scale derivation, region conversion
//!
//! Everything in here is a pure function of its inputs plus the immutable
//! classifier configuration. No I/O, no caches, no shared mutable state.

pub mod classifier;
pub mod converter;
pub mod scale;

pub use classifier::TruckClassifier;
pub use converter::{area_m2, convert, is_plausible, meters_to_pixels, pixel_to_meters};
pub use scale::{estimate_scale, scale_from_reference};
