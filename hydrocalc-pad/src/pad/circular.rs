use std::f64::consts::FRAC_PI_4;

use uom::si::f64::{Area, Length};

use crate::{Axis, AxisDimensions, DimensionGroup, ResolveError, Tolerance, resolve};

use super::{FlowRateCoefficient, Pad, placeholder_flow_rate_coefficient};

/// A circular pad with a concentric circular recess.
///
/// Its single diameter axis follows the same relation as a rectangular axis:
/// pad diameter = recess diameter + 2 · land width.
#[derive(Debug, Clone, PartialEq)]
pub struct CircularPad {
    diameter_group: DimensionGroup,
    tolerance: Tolerance,
}

impl CircularPad {
    /// Creates a pad using the default [`Tolerance`].
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] if the diameter axis cannot be resolved.
    pub fn new(dims: AxisDimensions) -> Result<Self, ResolveError> {
        Self::with_tolerance(dims, Tolerance::default())
    }

    /// Creates a pad that checks redundant input against `tolerance`.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] if the diameter axis cannot be resolved.
    pub fn with_tolerance(dims: AxisDimensions, tolerance: Tolerance) -> Result<Self, ResolveError> {
        Ok(Self {
            diameter_group: resolve(Axis::Diameter, dims, &tolerance)?,
            tolerance,
        })
    }

    /// Replaces the diameter axis with one resolved from `dims`.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] if `dims` cannot be resolved, in which case
    /// the pad is left unchanged.
    pub fn update_diameter(&mut self, dims: AxisDimensions) -> Result<(), ResolveError> {
        self.diameter_group = resolve(Axis::Diameter, dims, &self.tolerance)?;
        Ok(())
    }

    #[must_use]
    pub fn diameter_group(&self) -> &DimensionGroup {
        &self.diameter_group
    }

    #[must_use]
    pub fn pad_diameter(&self) -> Length {
        self.diameter_group.pad()
    }

    /// Diameter of the recess.
    #[must_use]
    pub fn slot_diameter(&self) -> Length {
        self.diameter_group.slot()
    }

    /// Radial width of the land around the recess.
    #[must_use]
    pub fn edge_width(&self) -> Length {
        self.diameter_group.edge()
    }
}

impl Pad for CircularPad {
    /// Placeholder of 1 m³/s until a circular flow formula is validated.
    fn flow_rate_coefficient(&self) -> FlowRateCoefficient {
        placeholder_flow_rate_coefficient()
    }

    /// Full pad footprint, `π/4 · D²`.
    fn effective_area(&self) -> Area {
        let d = self.pad_diameter();
        FRAC_PI_4 * d * d
    }
}
