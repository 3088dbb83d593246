use uom::si::{
    f64::{Length, Pressure},
    length::meter,
    pressure::pascal,
};

use crate::FlowError;

/// Operating conditions of a bearing pad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    film_thickness: Length,
    pressure: Pressure,
}

impl OperatingPoint {
    /// Creates an operating point from the lubricant film thickness and the
    /// pressure differential across the land.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidFilmThickness`] if the film thickness is
    /// not finite and positive, or [`FlowError::InvalidPressure`] if the
    /// pressure is negative or not finite.
    pub fn new(film_thickness: Length, pressure: Pressure) -> Result<Self, FlowError> {
        let meters = film_thickness.get::<meter>();
        if !meters.is_finite() || meters <= 0.0 {
            return Err(FlowError::InvalidFilmThickness { meters });
        }

        let pascals = pressure.get::<pascal>();
        if !pascals.is_finite() || pascals < 0.0 {
            return Err(FlowError::InvalidPressure { pascals });
        }

        Ok(Self {
            film_thickness,
            pressure,
        })
    }

    #[must_use]
    pub fn film_thickness(&self) -> Length {
        self.film_thickness
    }

    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }
}
