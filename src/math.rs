//! Mathematical utilities for almanac calculations.

/// Mathematical constants
pub const PI: f64 = core::f64::consts::PI;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Normalizes an angle in degrees to the range [0, 360).
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    let normalized = degrees % 360.0;
    if normalized < 0.0 {
        normalized + 360.0
    } else {
        normalized
    }
}

/// Rounds a value to the given number of decimal places.
///
/// Output quantities carry fixed precision (2 decimals for angles, 6 for
/// astronomical units, 1 for the moon age, whole kilometers for distance).
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let scale = 10.0_f64.powi(places);
    (value * scale).round() / scale
}
