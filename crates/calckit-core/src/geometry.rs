//! Area formulas for a square, a rectangle and a circle.
//!
//! All three functions are total over `f64`: they never panic and never
//! reject input. Negative dimensions are not validated here; a negative
//! side squares to a positive area and a negative base or height carries
//! its sign into the rectangle area. Callers that need a physical domain
//! run [`validate_dimension`] first (see [`crate::options::ValidationPolicy`]).

use std::f64::consts::PI;

use crate::calculator::CalcError;

/// Area of a square with the given side length.
///
/// ```
/// assert_eq!(calckit_core::geometry::area_square(4.0), 16.0);
/// ```
#[must_use]
pub fn area_square(side: f64) -> f64 {
    side * side
}

/// Area of a rectangle.
///
/// ```
/// assert_eq!(calckit_core::geometry::area_rectangle(5.0, 3.0), 15.0);
/// ```
#[must_use]
pub fn area_rectangle(base: f64, height: f64) -> f64 {
    base * height
}

/// Area of a circle, `π·r²` at `f64` precision.
#[must_use]
pub fn area_circle(radius: f64) -> f64 {
    PI * radius * radius
}

/// Check that `value` is a finite, non-negative dimension.
///
/// Returns the value unchanged on success so it can be chained with `?`.
pub fn validate_dimension(name: &'static str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CalcError::InvalidDimension { name, value })
    }
}
