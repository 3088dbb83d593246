use thiserror::Error;

/// Errors that may occur in flow and load calculations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum FlowError {
    /// Film thickness must be finite and strictly positive, in meters.
    #[error("film thickness must be finite and positive, got {meters} m")]
    InvalidFilmThickness { meters: f64 },

    /// Pressure must be finite and non-negative, in pascals.
    #[error("pressure must be finite and non-negative, got {pascals} Pa")]
    InvalidPressure { pascals: f64 },

    /// The pad has no positive load-supporting area.
    #[error("pad has no positive effective area (got {square_meters} m²)")]
    NoEffectiveArea { square_meters: f64 },
}
