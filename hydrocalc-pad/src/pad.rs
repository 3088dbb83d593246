//! Bearing pad geometries.

mod circular;
mod rectangular;

pub use circular::CircularPad;
pub use rectangular::{RectangularPad, RectangularPadInput};

use uom::si::{
    f64::{Area, VolumeRate},
    volume_rate::cubic_meter_per_second,
};

/// Shape-dependent coefficient of the hydrostatic flow equation
/// `Q = coefficient · h³ · Δp / μ`.
pub type FlowRateCoefficient = VolumeRate;

/// Capabilities every bearing pad geometry provides to flow calculations.
///
/// Implementors own the [`DimensionGroup`](crate::DimensionGroup)s their
/// shape needs and derive both quantities from them.
///
/// # Example
///
/// ```
/// use hydrocalc_pad::{Pad, RectangularPad, RectangularPadInput};
/// use uom::si::{area::square_millimeter, f64::Length, length::millimeter};
///
/// let mm = Length::new::<millimeter>;
/// let pad = RectangularPad::new(RectangularPadInput {
///     pad_length: Some(mm(1000.0)),
///     slot_length: Some(mm(940.0)),
///     pad_width: Some(mm(120.0)),
///     edge_width: Some(mm(30.0)),
///     ..RectangularPadInput::default()
/// })
/// .unwrap();
///
/// let pads: Vec<Box<dyn Pad>> = vec![Box::new(pad)];
/// let area = pads[0].effective_area().get::<square_millimeter>();
/// assert!((area - 120_000.0).abs() < 1e-6);
/// ```
pub trait Pad {
    /// Returns the coefficient used in the hydrostatic flow equation.
    fn flow_rate_coefficient(&self) -> FlowRateCoefficient;

    /// Returns the load-supporting area of the pad.
    fn effective_area(&self) -> Area;
}

/// Unit coefficient shared by geometries without a validated flow formula.
// TODO: replace with shape factors once rectangular and circular flow formulas are validated.
fn placeholder_flow_rate_coefficient() -> FlowRateCoefficient {
    VolumeRate::new::<cubic_meter_per_second>(1.0)
}
