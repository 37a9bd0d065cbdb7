//! Default truck-type table and size-threshold bands
//!
//! Reference heights are assumed real-world heights in meters for common
//! North American truck types. Band edges are pixel cutoffs tuned for a
//! roughly fronto-parallel photo; both are configuration defaults, not
//! hard limits.

use crate::config::SizeBand;
use std::collections::BTreeMap;

/// (label, reference height in meters)
pub const DEFAULT_TRUCK_HEIGHTS: &[(&str, f64)] = &[
    ("Semi Trailer", 4.0),
    ("Box Truck", 3.5),
    ("Cube Van", 3.0),
    ("Sprinter Van", 2.5),
    ("Cargo Van", 2.0),
];

/// Aspect ratio (width/height) above which a large box is a semi trailer.
pub const SEMI_TRAILER_MIN_ASPECT: f64 = 2.0;

pub fn default_truck_heights() -> BTreeMap<String, f64> {
    DEFAULT_TRUCK_HEIGHTS
        .iter()
        .map(|(label, h)| (label.to_string(), *h))
        .collect()
}

/// Default classification bands, largest threshold first.
///
/// The top band splits on aspect ratio: long-and-low boxes above the
/// threshold are semi trailers, the rest box trucks. The bottom band is
/// open-ended so any positive height classifies.
pub fn default_size_bands() -> Vec<SizeBand> {
    vec![
        SizeBand {
            min_height_px: 300.0,
            label: "Box Truck".to_string(),
            wide_label: Some("Semi Trailer".to_string()),
            wide_min_aspect: Some(SEMI_TRAILER_MIN_ASPECT),
        },
        SizeBand {
            min_height_px: 200.0,
            label: "Cube Van".to_string(),
            wide_label: None,
            wide_min_aspect: None,
        },
        SizeBand {
            min_height_px: 100.0,
            label: "Sprinter Van".to_string(),
            wide_label: None,
            wide_min_aspect: None,
        },
        SizeBand {
            min_height_px: 0.0,
            label: "Cargo Van".to_string(),
            wide_label: None,
            wide_min_aspect: None,
        },
    ]
}
