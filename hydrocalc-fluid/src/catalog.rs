use std::collections::BTreeMap;

use tracing::debug;
use uom::si::{dynamic_viscosity::pascal_second, f64::DynamicViscosity};

use crate::{Fluid, FluidError};

/// A name-keyed collection of fluids.
///
/// Names are matched case-insensitively, ignoring surrounding whitespace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FluidCatalog {
    fluids: BTreeMap<String, Fluid>,
}

impl FluidCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a catalog of reference fluids at 20 °C and atmospheric pressure.
    ///
    /// Contains `Water` (1.0016 mPa·s) and `Air` (18.13 µPa·s).
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (name, pascal_seconds) in [("Water", 1.0016e-3), ("Air", 1.813e-5)] {
            catalog.fluids.insert(
                normalize(name),
                Fluid {
                    name: name.to_string(),
                    viscosity: DynamicViscosity::new::<pascal_second>(pascal_seconds),
                },
            );
        }
        catalog
    }

    /// Registers a fluid, returning any fluid previously stored under the same name.
    pub fn insert(&mut self, fluid: Fluid) -> Option<Fluid> {
        debug!(name = fluid.name(), "registered fluid");
        self.fluids.insert(normalize(fluid.name()), fluid)
    }

    /// Returns a copy of the fluid registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`FluidError::UnknownFluid`] if no fluid has that name.
    pub fn lookup(&self, name: &str) -> Result<Fluid, FluidError> {
        self.fluids
            .get(&normalize(name))
            .cloned()
            .ok_or_else(|| FluidError::UnknownFluid(name.to_string()))
    }

    /// Returns the registered fluids ordered by normalized name.
    pub fn iter(&self) -> impl Iterator<Item = &Fluid> {
        self.fluids.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fluids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fluids.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn builtin_lookup_ignores_case_and_whitespace() {
        let catalog = FluidCatalog::builtin();

        let air = catalog.lookup("  AIR ").unwrap();
        assert_eq!(air.name(), "Air");
        assert_relative_eq!(air.viscosity().get::<pascal_second>(), 1.813e-5);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn unknown_fluid() {
        let catalog = FluidCatalog::builtin();

        assert_eq!(
            catalog.lookup("Mobil SHC 8051"),
            Err(FluidError::UnknownFluid("Mobil SHC 8051".to_string()))
        );
    }

    #[test]
    fn insert_registers_and_replaces() {
        let mut catalog = FluidCatalog::new();
        assert!(catalog.is_empty());

        let thin = Fluid::new("Test Oil", DynamicViscosity::new::<pascal_second>(0.02)).unwrap();
        let thick = Fluid::new("test oil", DynamicViscosity::new::<pascal_second>(0.2)).unwrap();

        assert!(catalog.insert(thin.clone()).is_none());
        assert_eq!(catalog.insert(thick), Some(thin));

        let found = catalog.lookup("TEST OIL").unwrap();
        assert_relative_eq!(found.viscosity().get::<pascal_second>(), 0.2);
        assert_eq!(catalog.iter().count(), 1);
    }
}
