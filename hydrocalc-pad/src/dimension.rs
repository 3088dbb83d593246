use uom::si::f64::Length;

use crate::Tolerance;

/// Three related lengths along one axis of a pad.
///
/// The `slot` is the recessed region and each `edge` is the land flanking it,
/// so the full `pad` dimension is `slot + 2·edge`.
///
/// A `DimensionGroup` can only be obtained from [`resolve`](crate::resolve),
/// which guarantees the relation holds (within tolerance for fully specified
/// input).
/// Groups are immutable; changing any member means resolving a new group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionGroup {
    pad: Length,
    slot: Length,
    edge: Length,
}

impl DimensionGroup {
    pub(crate) fn new(pad: Length, slot: Length, edge: Length) -> Self {
        Self { pad, slot, edge }
    }

    /// Full pad dimension.
    #[must_use]
    pub fn pad(&self) -> Length {
        self.pad
    }

    /// Slot (recess) dimension.
    #[must_use]
    pub fn slot(&self) -> Length {
        self.slot
    }

    /// Edge (land) dimension.
    #[must_use]
    pub fn edge(&self) -> Length {
        self.edge
    }

    /// Returns `(pad, slot, edge)`.
    #[must_use]
    pub fn values(&self) -> (Length, Length, Length) {
        (self.pad, self.slot, self.edge)
    }

    /// Returns `true` if `pad = slot + 2·edge` holds within `tolerance`.
    #[must_use]
    pub fn satisfies(&self, tolerance: &Tolerance) -> bool {
        tolerance.is_close(self.pad, self.slot + 2.0 * self.edge)
    }
}
