use hydrocalc_fluid::Fluid;
use hydrocalc_pad::Pad;
use tracing::debug;
use uom::si::{
    area::square_meter,
    f64::{Force, Pressure},
};

use crate::{FlowError, OperatingPoint, units::HydrostaticFlow};

/// Evaluates the hydrostatic flow equation `Q = coefficient · h³ · Δp / μ`.
///
/// `h` and `Δp` come from `operating_point` and `μ` is the fluid viscosity.
/// See [`HydrostaticFlow`] for the dimension of the result.
#[must_use]
pub fn flow_rate<P: Pad + ?Sized>(
    pad: &P,
    fluid: &Fluid,
    operating_point: &OperatingPoint,
) -> HydrostaticFlow {
    let h = operating_point.film_thickness();
    let flow =
        pad.flow_rate_coefficient() * (h * h * h) * operating_point.pressure() / fluid.viscosity();

    debug!(fluid = fluid.name(), flow = flow.value, "evaluated hydrostatic flow");
    flow
}

/// Returns the load a pad supports at the given recess pressure, `p · A`.
#[must_use]
pub fn load_capacity<P: Pad + ?Sized>(pad: &P, pressure: Pressure) -> Force {
    pressure * pad.effective_area()
}

/// Returns the recess pressure needed to support `load`, `W / A`.
///
/// # Errors
///
/// Returns [`FlowError::NoEffectiveArea`] if the pad's effective area is not
/// finite and positive.
pub fn required_pressure<P: Pad + ?Sized>(pad: &P, load: Force) -> Result<Pressure, FlowError> {
    let area = pad.effective_area();
    let square_meters = area.get::<square_meter>();

    if !square_meters.is_finite() || square_meters <= 0.0 {
        return Err(FlowError::NoEffectiveArea { square_meters });
    }

    Ok(load / area)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use hydrocalc_pad::{AxisDimensions, CircularPad, RectangularPad, RectangularPadInput};
    use uom::si::{
        dynamic_viscosity::pascal_second,
        f64::{DynamicViscosity, Length},
        force::{kilonewton, newton},
        length::{micrometer, millimeter},
        pressure::{kilopascal, megapascal, pascal},
    };

    fn mm(value: f64) -> Length {
        Length::new::<millimeter>(value)
    }

    fn reference_pad() -> RectangularPad {
        RectangularPad::new(RectangularPadInput {
            pad_length: Some(mm(1000.0)),
            slot_length: Some(mm(940.0)),
            pad_width: Some(mm(120.0)),
            edge_width: Some(mm(30.0)),
            ..RectangularPadInput::default()
        })
        .unwrap()
    }

    #[test]
    fn flow_scales_with_cube_of_film_thickness() {
        let pad = reference_pad();
        let oil = Fluid::new("oil", DynamicViscosity::new::<pascal_second>(0.05)).unwrap();
        let p = Pressure::new::<megapascal>(1.0);

        let thin = OperatingPoint::new(Length::new::<micrometer>(20.0), p).unwrap();
        let thick = OperatingPoint::new(Length::new::<micrometer>(40.0), p).unwrap();

        let q_thin = flow_rate(&pad, &oil, &thin);
        let q_thick = flow_rate(&pad, &oil, &thick);

        // 1 m³/s · (20e-6 m)³ · 1e6 Pa / 0.05 Pa·s
        assert_relative_eq!(q_thin.value, 1.6e-7, max_relative = 1e-12);
        assert_relative_eq!(q_thick.value / q_thin.value, 8.0, max_relative = 1e-12);
    }

    #[test]
    fn flow_is_inverse_in_viscosity() {
        let pad = reference_pad();
        let op = OperatingPoint::new(
            Length::new::<micrometer>(50.0),
            Pressure::new::<kilopascal>(500.0),
        )
        .unwrap();

        let water = Fluid::lookup("water").unwrap();
        let oil = Fluid::new("oil", DynamicViscosity::new::<pascal_second>(0.1)).unwrap();

        let ratio = flow_rate(&pad, &water, &op).value / flow_rate(&pad, &oil, &op).value;
        assert_relative_eq!(ratio, 0.1 / 1.0016e-3, max_relative = 1e-12);
    }

    #[test]
    fn load_and_pressure_are_consistent() {
        let pad = reference_pad();
        let load = Force::new::<kilonewton>(294.199_5);

        let p = required_pressure(&pad, load).unwrap();
        assert_relative_eq!(p.get::<pascal>(), 294_199.5 / 0.12, max_relative = 1e-9);
        assert_relative_eq!(
            load_capacity(&pad, p).get::<newton>(),
            294_199.5,
            max_relative = 1e-9
        );
    }

    #[test]
    fn works_with_trait_objects() {
        let pad: Box<dyn Pad> = Box::new(
            CircularPad::new(AxisDimensions {
                pad: Some(mm(200.0)),
                slot: Some(mm(120.0)),
                ..AxisDimensions::default()
            })
            .unwrap(),
        );

        let force = load_capacity(pad.as_ref(), Pressure::new::<megapascal>(1.0));
        let expected = std::f64::consts::PI * 0.1 * 0.1 * 1e6;
        assert_relative_eq!(force.get::<newton>(), expected, max_relative = 1e-9);
    }

    #[test]
    fn degenerate_pad_has_no_required_pressure() {
        let pad = RectangularPad::new(RectangularPadInput {
            slot_length: Some(mm(0.0)),
            edge_length: Some(mm(0.0)),
            pad_width: Some(mm(120.0)),
            edge_width: Some(mm(30.0)),
            ..RectangularPadInput::default()
        })
        .unwrap();

        assert_eq!(
            required_pressure(&pad, Force::new::<newton>(10.0)),
            Err(FlowError::NoEffectiveArea { square_meters: 0.0 })
        );
    }
}
