//! Region conversion from pixels to meters

use crate::error::{Error, Result};
use crate::types::{MeasurementResult, Region, ScaleFactor};
use log::debug;

/// Convert a pixel region into metric dimensions.
pub fn convert(region: &Region, scale: ScaleFactor) -> Result<MeasurementResult> {
    if region.width <= 0.0 || region.height <= 0.0 {
        return Err(Error::InvalidDimension(format!(
            "region must have positive dimensions, got {}x{}",
            region.width, region.height
        )));
    }
    if scale.meters_per_pixel <= 0.0 {
        return Err(Error::InvalidDimension(format!(
            "scale must be positive, got {}",
            scale.meters_per_pixel
        )));
    }

    let result = MeasurementResult {
        width_m: region.width * scale.meters_per_pixel,
        height_m: region.height * scale.meters_per_pixel,
    };
    debug!("measured: {:.2}m x {:.2}m", result.width_m, result.height_m);
    Ok(result)
}

/// Single-axis pixel length to meters, e.g. for a scale-bar overlay.
pub fn pixel_to_meters(pixel_value: f64, scale: ScaleFactor) -> f64 {
    pixel_value * scale.meters_per_pixel
}

/// Single-axis meters to pixel length.
pub fn meters_to_pixels(meter_value: f64, scale: ScaleFactor) -> Result<f64> {
    if scale.meters_per_pixel <= 0.0 {
        return Err(Error::InvalidDimension(format!(
            "scale must be positive, got {}",
            scale.meters_per_pixel
        )));
    }
    Ok(meter_value / scale.meters_per_pixel)
}

/// Area of a measured region in square meters.
pub fn area_m2(result: &MeasurementResult) -> f64 {
    result.width_m * result.height_m
}

/// Sanity check against nonsense output (bad scale, wrong frame).
pub fn is_plausible(result: &MeasurementResult, max_reasonable_m: f64) -> bool {
    result.width_m > 0.0
        && result.height_m > 0.0
        && result.width_m <= max_reasonable_m
        && result.height_m <= max_reasonable_m
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale(meters_per_pixel: f64) -> ScaleFactor {
        ScaleFactor { meters_per_pixel }
    }

    #[test]
    fn test_convert() {
        // 100x50 px at 0.0175 m/px = 1.75m x 0.875m
        let region = Region::new(10.0, 20.0, 100.0, 50.0);
        let result = convert(&region, scale(0.0175)).unwrap();
        assert!((result.width_m - 1.75).abs() < 1e-12);
        assert!((result.height_m - 0.875).abs() < 1e-12);
    }

    #[test]
    fn test_convert_zero_width_is_error() {
        let region = Region::new(10.0, 20.0, 0.0, 50.0);
        assert!(matches!(
            convert(&region, scale(0.0175)),
            Err(Error::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_convert_non_positive_scale_is_error() {
        let region = Region::new(0.0, 0.0, 100.0, 50.0);
        assert!(matches!(
            convert(&region, scale(0.0)),
            Err(Error::InvalidDimension(_))
        ));
        assert!(matches!(
            convert(&region, scale(-0.01)),
            Err(Error::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_convert_is_monotonic_in_region_width() {
        let s = scale(0.0175);
        let single = convert(&Region::new(0.0, 0.0, 100.0, 50.0), s).unwrap();
        let doubled = convert(&Region::new(0.0, 0.0, 200.0, 50.0), s).unwrap();
        assert!((doubled.width_m - 2.0 * single.width_m).abs() < 1e-12);
        assert!((doubled.height_m - single.height_m).abs() < 1e-12);
    }

    #[test]
    fn test_pixel_to_meters() {
        assert!((pixel_to_meters(200.0, scale(0.0175)) - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_meters_to_pixels_roundtrip() {
        let s = scale(0.0175);
        let px = meters_to_pixels(3.5, s).unwrap();
        assert!((px - 200.0).abs() < 1e-9);
        assert!(matches!(
            meters_to_pixels(3.5, scale(0.0)),
            Err(Error::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_area() {
        let result = MeasurementResult {
            width_m: 1.75,
            height_m: 0.875,
        };
        assert!((area_m2(&result) - 1.53125).abs() < 1e-12);
    }

    #[test]
    fn test_plausibility_check() {
        let ok = MeasurementResult {
            width_m: 1.75,
            height_m: 0.875,
        };
        let huge = MeasurementResult {
            width_m: 120.0,
            height_m: 0.875,
        };
        assert!(is_plausible(&ok, 10.0));
        assert!(!is_plausible(&huge, 10.0));
    }
}
