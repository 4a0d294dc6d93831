//! Angle and clock arithmetic shared by the almanac equation.

/// Normalizes an angle in degrees to the range [0, 360).
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    let normalized = degrees % 360.0;
    if normalized < 0.0 {
        normalized + 360.0
    } else {
        normalized
    }
}

/// Normalizes a fractional hour count to the range [0, 24).
pub fn normalize_hours_0_to_24(hours: f64) -> f64 {
    let normalized = hours % 24.0;
    if normalized < 0.0 {
        normalized + 24.0
    } else {
        normalized
    }
}
