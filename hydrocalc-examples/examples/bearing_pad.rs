//! # Rectangular Bearing Pad
//!
//! Sizes a water-lubricated rectangular pad carrying a 30 t load.
//!
//! - The pad geometry is read from JSON, giving two lengths per axis.
//!   The remaining slot lengths are derived.
//! - The recess pressure needed to carry the load follows from the pad's
//!   effective area.
//! - Flow is evaluated at a 25 µm film thickness.
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run --example bearing_pad
//! ```
//!
//! Dimension derivations are logged at `DEBUG`.

use std::error::Error;

use hydrocalc_flow::{OperatingPoint, flow_rate, load_capacity, required_pressure};
use hydrocalc_fluid::Fluid;
use hydrocalc_pad::{AxisDimensions, Pad, RectangularPad, RectangularPadInput};
use tracing::{Level, info};
use uom::si::{
    acceleration::meter_per_second_squared,
    area::square_meter,
    f64::{Acceleration, Length, Mass},
    force::kilonewton,
    length::{micrometer, millimeter},
    mass::kilogram,
    pressure::bar,
};

const PAD_JSON: &str = r#"{
    "pad_length": "1 m",
    "edge_length": "30 mm",
    "pad_width": "120 mm",
    "edge_width": "30 mm"
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let input: RectangularPadInput = serde_json::from_str(PAD_JSON)?;
    let mut pad = RectangularPad::new(input)?;

    info!(
        slot_length_mm = pad.slot_length().get::<millimeter>(),
        slot_width_mm = pad.slot_width().get::<millimeter>(),
        area_m2 = pad.effective_area().get::<square_meter>(),
        "resolved pad"
    );

    let standard_gravity = Acceleration::new::<meter_per_second_squared>(9.806_65);
    let load = Mass::new::<kilogram>(30_000.0) * standard_gravity;

    let pressure = required_pressure(&pad, load)?;
    info!(
        load_kn = load.get::<kilonewton>(),
        pressure_bar = pressure.get::<bar>(),
        "required recess pressure"
    );

    let water = Fluid::lookup("water")?;
    let operating_point = OperatingPoint::new(Length::new::<micrometer>(25.0), pressure)?;
    let flow = flow_rate(&pad, &water, &operating_point);
    info!(fluid = water.name(), flow = flow.value, "hydrostatic flow (SI)");

    // Widen the recess while keeping the lands, then recheck the load.
    pad.update_width(AxisDimensions {
        slot: Some(Length::new::<millimeter>(90.0)),
        edge: Some(Length::new::<millimeter>(30.0)),
        ..AxisDimensions::default()
    })?;
    info!(
        pad_width_mm = pad.pad_width().get::<millimeter>(),
        capacity_kn = load_capacity(&pad, pressure).get::<kilonewton>(),
        "load capacity after widening"
    );

    Ok(())
}
