use serde::{Deserialize, Serialize};
use uom::si::f64::{Area, Length};

use crate::{
    Axis, AxisDimensions, DimensionGroup, ResolveError, Tolerance,
    length::{deserialize_optional_length, serialize_optional_length},
    resolve,
};

use super::{FlowRateCoefficient, Pad, placeholder_flow_rate_coefficient};

/// Named lengths used to construct a [`RectangularPad`].
///
/// At least two of the three lengths must be given for each axis.
/// Deserializes from lengths written as strings, for example:
///
/// ```json
/// { "pad_length": "1 m", "slot_length": "940 mm", "pad_width": "120 mm", "edge_width": "30 mm" }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RectangularPadInput {
    #[serde(
        default,
        serialize_with = "serialize_optional_length",
        deserialize_with = "deserialize_optional_length",
        skip_serializing_if = "Option::is_none"
    )]
    pub pad_length: Option<Length>,

    #[serde(
        default,
        serialize_with = "serialize_optional_length",
        deserialize_with = "deserialize_optional_length",
        skip_serializing_if = "Option::is_none"
    )]
    pub slot_length: Option<Length>,

    #[serde(
        default,
        serialize_with = "serialize_optional_length",
        deserialize_with = "deserialize_optional_length",
        skip_serializing_if = "Option::is_none"
    )]
    pub edge_length: Option<Length>,

    #[serde(
        default,
        serialize_with = "serialize_optional_length",
        deserialize_with = "deserialize_optional_length",
        skip_serializing_if = "Option::is_none"
    )]
    pub pad_width: Option<Length>,

    #[serde(
        default,
        serialize_with = "serialize_optional_length",
        deserialize_with = "deserialize_optional_length",
        skip_serializing_if = "Option::is_none"
    )]
    pub slot_width: Option<Length>,

    #[serde(
        default,
        serialize_with = "serialize_optional_length",
        deserialize_with = "deserialize_optional_length",
        skip_serializing_if = "Option::is_none"
    )]
    pub edge_width: Option<Length>,
}

impl RectangularPadInput {
    /// Returns the lengths along the length axis.
    #[must_use]
    pub fn length_dimensions(&self) -> AxisDimensions {
        AxisDimensions {
            pad: self.pad_length,
            slot: self.slot_length,
            edge: self.edge_length,
        }
    }

    /// Returns the lengths along the width axis.
    #[must_use]
    pub fn width_dimensions(&self) -> AxisDimensions {
        AxisDimensions {
            pad: self.pad_width,
            slot: self.slot_width,
            edge: self.edge_width,
        }
    }
}

/// A rectangular pad with a rectangular recess.
///
/// The length and width axes are resolved independently.
/// Each axis can only be changed as a whole through [`update_length`] or
/// [`update_width`], so both groups stay consistent at all times.
///
/// [`update_length`]: RectangularPad::update_length
/// [`update_width`]: RectangularPad::update_width
#[derive(Debug, Clone, PartialEq)]
pub struct RectangularPad {
    length_group: DimensionGroup,
    width_group: DimensionGroup,
    tolerance: Tolerance,
}

impl RectangularPad {
    /// Creates a pad using the default [`Tolerance`].
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] if either axis cannot be resolved.
    /// The length axis is resolved first.
    pub fn new(input: RectangularPadInput) -> Result<Self, ResolveError> {
        Self::with_tolerance(input, Tolerance::default())
    }

    /// Creates a pad that checks redundant input against `tolerance`.
    ///
    /// The tolerance is kept for later axis updates.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] if either axis cannot be resolved.
    pub fn with_tolerance(
        input: RectangularPadInput,
        tolerance: Tolerance,
    ) -> Result<Self, ResolveError> {
        let length_group = resolve(Axis::Length, input.length_dimensions(), &tolerance)?;
        let width_group = resolve(Axis::Width, input.width_dimensions(), &tolerance)?;

        Ok(Self {
            length_group,
            width_group,
            tolerance,
        })
    }

    /// Replaces the length axis with one resolved from `dims`.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] if `dims` cannot be resolved, in which case
    /// the pad is left unchanged.
    pub fn update_length(&mut self, dims: AxisDimensions) -> Result<(), ResolveError> {
        self.length_group = resolve(Axis::Length, dims, &self.tolerance)?;
        Ok(())
    }

    /// Replaces the width axis with one resolved from `dims`.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] if `dims` cannot be resolved, in which case
    /// the pad is left unchanged.
    pub fn update_width(&mut self, dims: AxisDimensions) -> Result<(), ResolveError> {
        self.width_group = resolve(Axis::Width, dims, &self.tolerance)?;
        Ok(())
    }

    #[must_use]
    pub fn length_group(&self) -> &DimensionGroup {
        &self.length_group
    }

    #[must_use]
    pub fn width_group(&self) -> &DimensionGroup {
        &self.width_group
    }

    #[must_use]
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    #[must_use]
    pub fn pad_length(&self) -> Length {
        self.length_group.pad()
    }

    #[must_use]
    pub fn slot_length(&self) -> Length {
        self.length_group.slot()
    }

    #[must_use]
    pub fn edge_length(&self) -> Length {
        self.length_group.edge()
    }

    #[must_use]
    pub fn pad_width(&self) -> Length {
        self.width_group.pad()
    }

    #[must_use]
    pub fn slot_width(&self) -> Length {
        self.width_group.slot()
    }

    #[must_use]
    pub fn edge_width(&self) -> Length {
        self.width_group.edge()
    }
}

impl Pad for RectangularPad {
    /// Placeholder of 1 m³/s until a rectangular flow formula is validated.
    fn flow_rate_coefficient(&self) -> FlowRateCoefficient {
        placeholder_flow_rate_coefficient()
    }

    /// Full pad footprint, `pad_length · pad_width`.
    ///
    /// This is a first-order baseline that ignores the slot and edge geometry.
    fn effective_area(&self) -> Area {
        self.pad_length() * self.pad_width()
    }
}
