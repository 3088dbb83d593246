//! Flow and load relations for hydrostatic bearing pads.
//!
//! Combines a [`Pad`](hydrocalc_pad::Pad), a [`Fluid`](hydrocalc_fluid::Fluid)
//! and an [`OperatingPoint`] into the quantities an engineer sizes a bearing
//! with: lubricant flow, load capacity and required recess pressure.

mod error;
mod flow;
mod operating_point;

pub mod units;

pub use error::FlowError;
pub use flow::{flow_rate, load_capacity, required_pressure};
pub use operating_point::OperatingPoint;
