//! Static configuration defaults

pub mod truck_types;

pub use truck_types::{default_size_bands, default_truck_heights, SEMI_TRAILER_MIN_ASPECT};
