use std::f64::consts::PI;

/// Cross-sectional area of a circular section of the given diameter.
pub fn circle_area(diameter: f64) -> f64 {
    PI * (diameter / 2.0).powi(2)
}
