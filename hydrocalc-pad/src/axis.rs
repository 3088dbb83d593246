use std::fmt;

use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

use crate::length::{deserialize_optional_length, serialize_optional_length};

/// A geometric axis governed by its own `pad = slot + 2·edge` relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Long direction of a rectangular pad.
    Length,
    /// Short direction of a rectangular pad.
    Width,
    /// Diameter of a circular pad.
    Diameter,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Length => "length",
            Self::Width => "width",
            Self::Diameter => "diameter",
        };
        f.write_str(name)
    }
}

/// The known lengths along one axis.
///
/// Any field left as `None` is treated as unknown and may be derived by
/// [`resolve`](crate::resolve) if the other two are present.
///
/// When deserialized, each length is a string such as `"120 mm"` and missing
/// fields are unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AxisDimensions {
    /// Full pad dimension along the axis.
    #[serde(
        default,
        serialize_with = "serialize_optional_length",
        deserialize_with = "deserialize_optional_length",
        skip_serializing_if = "Option::is_none"
    )]
    pub pad: Option<Length>,

    /// Recessed slot dimension along the axis.
    #[serde(
        default,
        serialize_with = "serialize_optional_length",
        deserialize_with = "deserialize_optional_length",
        skip_serializing_if = "Option::is_none"
    )]
    pub slot: Option<Length>,

    /// Land width on each side of the slot.
    #[serde(
        default,
        serialize_with = "serialize_optional_length",
        deserialize_with = "deserialize_optional_length",
        skip_serializing_if = "Option::is_none"
    )]
    pub edge: Option<Length>,
}

impl AxisDimensions {
    /// Returns how many of the three lengths are known.
    #[must_use]
    pub fn known_count(&self) -> usize {
        [self.pad, self.slot, self.edge]
            .iter()
            .filter(|length| length.is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::length::millimeter;

    #[test]
    fn counts_known_lengths() {
        let mm = Length::new::<millimeter>;

        assert_eq!(AxisDimensions::default().known_count(), 0);

        let dims = AxisDimensions {
            slot: Some(mm(940.0)),
            ..AxisDimensions::default()
        };
        assert_eq!(dims.known_count(), 1);

        let dims = AxisDimensions {
            pad: Some(mm(1000.0)),
            slot: Some(mm(940.0)),
            edge: Some(mm(30.0)),
        };
        assert_eq!(dims.known_count(), 3);
    }

    #[test]
    fn axis_names() {
        assert_eq!(Axis::Length.to_string(), "length");
        assert_eq!(Axis::Width.to_string(), "width");
        assert_eq!(Axis::Diameter.to_string(), "diameter");
    }
}
