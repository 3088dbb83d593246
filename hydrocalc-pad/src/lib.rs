//! Hydrostatic bearing pad geometry.
//!
//! A pad's dimensions along each geometric axis are tied by the relation
//! `pad = slot + 2·edge`.
//! Callers supply any two (or all three) of those lengths per axis and the
//! [`resolve`] function derives a consistent [`DimensionGroup`], rejecting
//! input that is missing information or contradicts itself.
//!
//! Concrete geometries such as [`RectangularPad`] and [`CircularPad`] own
//! their groups and implement the [`Pad`] trait consumed by flow calculations.

mod axis;
mod dimension;
mod length;
mod resolve;
mod tolerance;

pub mod pad;

pub use axis::{Axis, AxisDimensions};
pub use dimension::DimensionGroup;
pub use pad::{CircularPad, FlowRateCoefficient, Pad, RectangularPad, RectangularPadInput};
pub use resolve::{ResolveError, resolve};
pub use tolerance::{Tolerance, ToleranceError};
