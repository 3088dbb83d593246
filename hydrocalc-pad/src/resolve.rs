use thiserror::Error;
use tracing::{debug, trace};
use uom::si::{f64::Length, length::meter};

use crate::{Axis, AxisDimensions, DimensionGroup, Tolerance};

/// Errors that can occur when resolving the dimensions of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// Fewer than two of the three lengths were supplied.
    #[error("at least two of {axis} (pad, slot, edge) must be provided, got {known}")]
    Underconstrained { axis: Axis, known: usize },

    /// All three lengths were supplied but `pad ≠ slot + 2·edge`.
    #[error(
        "over-constrained {axis}: pad={supplied:?}, expected {expected:?} (slot + 2 * edge)"
    )]
    Overconstrained {
        axis: Axis,
        supplied: Length,
        expected: Length,
    },
}

/// Resolves the lengths of one axis into a consistent [`DimensionGroup`].
///
/// Exactly two known lengths determine the third through
/// `pad = slot + 2·edge`, and the two supplied values are kept as given.
/// When all three are known, the supplied `pad` is checked against
/// `slot + 2·edge` using `tolerance` and kept unchanged if it agrees.
///
/// # Errors
///
/// Returns [`ResolveError::Underconstrained`] if fewer than two lengths are
/// known, or [`ResolveError::Overconstrained`] if three inconsistent lengths
/// are given.
pub fn resolve(
    axis: Axis,
    dims: AxisDimensions,
    tolerance: &Tolerance,
) -> Result<DimensionGroup, ResolveError> {
    match (dims.pad, dims.slot, dims.edge) {
        (Some(pad), Some(slot), Some(edge)) => {
            let expected = slot + 2.0 * edge;
            if !tolerance.is_close(pad, expected) {
                return Err(ResolveError::Overconstrained {
                    axis,
                    supplied: pad,
                    expected,
                });
            }
            trace!(%axis, pad_m = pad.get::<meter>(), "accepted redundant pad dimension");
            Ok(DimensionGroup::new(pad, slot, edge))
        }
        (None, Some(slot), Some(edge)) => {
            let pad = slot + 2.0 * edge;
            debug!(%axis, pad_m = pad.get::<meter>(), "derived pad from slot and edge");
            Ok(DimensionGroup::new(pad, slot, edge))
        }
        (Some(pad), None, Some(edge)) => {
            let slot = pad - 2.0 * edge;
            debug!(%axis, slot_m = slot.get::<meter>(), "derived slot from pad and edge");
            Ok(DimensionGroup::new(pad, slot, edge))
        }
        (Some(pad), Some(slot), None) => {
            let edge = (pad - slot) / 2.0;
            debug!(%axis, edge_m = edge.get::<meter>(), "derived edge from pad and slot");
            Ok(DimensionGroup::new(pad, slot, edge))
        }
        _ => Err(ResolveError::Underconstrained {
            axis,
            known: dims.known_count(),
        }),
    }
}
