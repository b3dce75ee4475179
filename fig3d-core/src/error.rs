//! Error types for figure construction.

use thiserror::Error;

/// Errors raised while building a figure.
///
/// Generation itself never fails for valid parameters; every variant here
/// is a rejected precondition, reported instead of emitting a broken mesh.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FigureError {
    /// A fan or ring needs at least one segment
    #[error("Segment count must be at least 1 (got {0})")]
    InvalidSegmentCount(u32),

    /// Radius must be finite and strictly positive
    #[error("Radius must be finite and positive (got {0})")]
    InvalidRadius(f32),

    /// A numeric parameter was NaN or infinite
    #[error("Non-finite {name}: {value}")]
    NonFinite { name: &'static str, value: f32 },

    /// Rotation axis cannot be normalized
    #[error("Rotation axis must be a non-zero finite vector (got {0:?})")]
    DegenerateAxis([f32; 3]),

    /// Color count outside the palette
    #[error("Color count must be between 1 and {palette_len} (got {count})")]
    InvalidColorCount { count: usize, palette_len: usize },

    /// Mesh buffers violate a structural invariant
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),
}

impl FigureError {
    pub fn invalid_mesh(message: impl Into<String>) -> Self {
        Self::InvalidMesh(message.into())
    }

    /// Reject NaN and infinities for a named parameter.
    pub fn check_finite(name: &'static str, value: f32) -> Result<f32, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFinite { name, value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_finite() {
        assert_eq!(FigureError::check_finite("height", 2.0), Ok(2.0));
        assert!(matches!(
            FigureError::check_finite("height", f32::NAN),
            Err(FigureError::NonFinite { name: "height", .. })
        ));
    }

    #[test]
    fn test_display() {
        let err = FigureError::InvalidColorCount {
            count: 7,
            palette_len: 6,
        };
        assert_eq!(err.to_string(), "Color count must be between 1 and 6 (got 7)");
    }
}
