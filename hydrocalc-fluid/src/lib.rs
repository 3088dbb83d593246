//! Lubricant data for hydrostatic bearing calculations.
//!
//! Flow through a bearing pad depends on the fluid only through its dynamic
//! viscosity, so a [`Fluid`] is a named viscosity.
//! Fluids are looked up by name in a [`FluidCatalog`].

mod catalog;
mod error;
mod fluid;

pub use catalog::FluidCatalog;
pub use error::FluidError;
pub use fluid::Fluid;
