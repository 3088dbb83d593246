use uom::si::{dynamic_viscosity::pascal_second, f64::DynamicViscosity};

use crate::{FluidCatalog, FluidError};

/// A named fluid with a known dynamic viscosity.
///
/// The viscosity is taken at the operating temperature of the bearing; no
/// temperature dependence is modeled.
///
/// # Example
///
/// ```
/// use hydrocalc_fluid::Fluid;
/// use uom::si::{dynamic_viscosity::pascal_second, f64::DynamicViscosity};
///
/// let oil = Fluid::new("ISO VG 46", DynamicViscosity::new::<pascal_second>(0.04)).unwrap();
/// assert_eq!(oil.name(), "ISO VG 46");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Fluid {
    pub(crate) name: String,
    pub(crate) viscosity: DynamicViscosity,
}

impl Fluid {
    /// Creates a fluid with the given name and viscosity.
    ///
    /// # Errors
    ///
    /// Returns [`FluidError::InvalidViscosity`] if the viscosity is not
    /// finite and strictly positive.
    pub fn new(name: impl Into<String>, viscosity: DynamicViscosity) -> Result<Self, FluidError> {
        let name = name.into();
        let pascal_seconds = viscosity.get::<pascal_second>();

        if pascal_seconds.is_finite() && pascal_seconds > 0.0 {
            Ok(Self { name, viscosity })
        } else {
            Err(FluidError::InvalidViscosity {
                name,
                pascal_seconds,
            })
        }
    }

    /// Looks up a fluid in the [built-in catalog](FluidCatalog::builtin).
    ///
    /// # Errors
    ///
    /// Returns [`FluidError::UnknownFluid`] if no built-in fluid has that name.
    pub fn lookup(name: &str) -> Result<Self, FluidError> {
        FluidCatalog::builtin().lookup(name)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dynamic viscosity at operating conditions.
    #[must_use]
    pub fn viscosity(&self) -> DynamicViscosity {
        self.viscosity
    }
}
