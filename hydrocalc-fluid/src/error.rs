use thiserror::Error;

/// Errors that may occur when defining or looking up a fluid.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum FluidError {
    /// No fluid with the given name is registered.
    #[error("unknown fluid `{0}`")]
    UnknownFluid(String),

    /// The viscosity is zero, negative, or not finite.
    ///
    /// The value is reported in Pa·s.
    #[error("viscosity of `{name}` must be finite and positive, got {pascal_seconds} Pa·s")]
    InvalidViscosity { name: String, pascal_seconds: f64 },
}
