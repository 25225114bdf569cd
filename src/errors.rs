//! Error types with diagnostics using miette
//!
//! Geometry errors are precondition violations raised by a single draw call or
//! basis update. Config errors reject a renderer before any scene is built.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Geometry Errors
// ============================================================================

/// Precondition violations in geometric operations
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("direction has to be a non-zero vector (length {length})")]
    #[diagnostic(
        code(basisgrid::geometry::zero_direction),
        help("a line or arrowhead needs a direction longer than the zero-vector epsilon")
    )]
    ZeroDirection { length: f64 },

    #[error("vector tail and head coincide")]
    #[diagnostic(code(basisgrid::geometry::zero_length_vector))]
    ZeroLengthVector,

    #[error("basis vectors are linearly dependent")]
    #[diagnostic(
        code(basisgrid::geometry::degenerate_basis),
        help("e1 and e2 must span the plane; move the handle off the other vector's line")
    )]
    DegenerateBasis,
}

// ============================================================================
// Config Errors
// ============================================================================

/// Invalid renderer configuration
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid pixels per unit {value}: {reason}")]
    #[diagnostic(code(basisgrid::config::invalid_pixels_per_unit))]
    InvalidPixelsPerUnit {
        value: f64,
        #[source]
        reason: NumericError,
    },

    #[error("invalid viewport {width}x{height}: {reason}")]
    #[diagnostic(
        code(basisgrid::config::invalid_viewport),
        help("the drawing surface must report a positive, finite size")
    )]
    InvalidViewport {
        width: f64,
        height: f64,
        #[source]
        reason: NumericError,
    },

    #[error("invalid hit radius {value}: {reason}")]
    #[diagnostic(code(basisgrid::config::invalid_hit_radius))]
    InvalidHitRadius {
        value: f64,
        #[source]
        reason: NumericError,
    },

    #[error("invalid color: {input:?}")]
    #[diagnostic(
        code(basisgrid::config::invalid_color),
        help("use #rgb, #rrggbb, #rrggbbaa or a color name")
    )]
    InvalidColor { input: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_direction_message_includes_length() {
        let err = GeometryError::ZeroDirection { length: 0.0 };
        assert_eq!(err.to_string(), "direction has to be a non-zero vector (length 0)");
    }

    #[test]
    fn config_errors_carry_diagnostic_codes() {
        let err = ConfigError::InvalidPixelsPerUnit {
            value: -1.0,
            reason: NumericError::Negative,
        };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("basisgrid::config::invalid_pixels_per_unit"));
        assert_eq!(err.to_string(), "invalid pixels per unit -1: value is negative");
    }
}
