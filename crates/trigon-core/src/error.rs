use thiserror::Error;

/// Errors from the fallible input and configuration surface.
///
/// Geometry operations themselves never fail; degenerate input is reported
/// through [`crate::report::Warning`] instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("invalid point {input:?}: {reason}")]
    ParsePoint { input: String, reason: String },

    #[error("invalid viewport: size {size} must be positive and usable area {usable} must be in (0, size]")]
    InvalidViewport { size: f64, usable: f64 },

    #[error("invalid arc radius {0}: must be finite and non-negative")]
    InvalidArcRadius(f64),

    #[error("invalid label offset {0}: must be finite")]
    InvalidLabelOffset(f64),
}
