/// Degree-based trigonometry used by the shape generators
use std::f32::consts::PI;

/// Convert an angle in degrees to radians
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

#[inline]
pub fn cos_deg(degrees: f32) -> f32 {
    to_radians(degrees).cos()
}

#[inline]
pub fn sin_deg(degrees: f32) -> f32 {
    to_radians(degrees).sin()
}

/// Wrap an angle that overshot a full turn back into `[0, 360)`.
///
/// Only a single turn is removed; callers stepping around a ring never
/// exceed two turns.
#[inline]
pub fn wrap_degrees(degrees: f32) -> f32 {
    if degrees >= 360.0 {
        degrees - 360.0
    } else {
        degrees
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_to_radians() {
        assert_relative_eq!(to_radians(180.0), PI);
        assert_relative_eq!(to_radians(90.0), PI / 2.0);
        assert_eq!(to_radians(0.0), 0.0);
    }

    #[test]
    fn test_degree_trig() {
        assert_relative_eq!(cos_deg(60.0), 0.5, epsilon = 1e-6);
        assert_relative_eq!(sin_deg(30.0), 0.5, epsilon = 1e-6);
        assert_relative_eq!(sin_deg(90.0), 1.0, epsilon = 1e-6);
        assert_relative_eq!(cos_deg(180.0), -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(378.0), 18.0);
        assert_eq!(wrap_degrees(359.0), 359.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
    }
}
