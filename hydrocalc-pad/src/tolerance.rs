use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::f64::Length;

/// Relative tolerance used when checking redundant dimensions.
///
/// Two lengths `a` and `b` are considered equal when
/// `|a − b| ≤ rel_tol · max(|a|, |b|)`, comparing their SI base-unit values.
///
/// Deserializes from `{ "rel_tol": 1e-6 }`, with `rel_tol` defaulting to
/// [`Tolerance::DEFAULT_REL_TOL`] when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTolerance")]
pub struct Tolerance {
    rel_tol: f64,
}

impl Tolerance {
    pub const DEFAULT_REL_TOL: f64 = 1e-6;

    /// Creates a tolerance with the given relative bound.
    ///
    /// # Errors
    ///
    /// Returns [`ToleranceError::Invalid`] if `rel_tol` is negative or not finite.
    pub fn new(rel_tol: f64) -> Result<Self, ToleranceError> {
        if rel_tol.is_finite() && rel_tol >= 0.0 {
            Ok(Self { rel_tol })
        } else {
            Err(ToleranceError::Invalid { rel_tol })
        }
    }

    /// Returns the relative bound.
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    /// Returns `true` if the two lengths agree within this tolerance.
    ///
    /// A relative deviation of exactly `rel_tol` is accepted.
    #[must_use]
    pub fn is_close(&self, a: Length, b: Length) -> bool {
        // `uom` stores every quantity in SI base units.
        let (a, b) = (a.value, b.value);
        (a - b).abs() <= self.rel_tol * a.abs().max(b.abs())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            rel_tol: Self::DEFAULT_REL_TOL,
        }
    }
}

/// Errors that can occur when creating a [`Tolerance`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ToleranceError {
    #[error("relative tolerance must be finite and non-negative, got {rel_tol}")]
    Invalid { rel_tol: f64 },
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTolerance {
    #[serde(default = "default_rel_tol")]
    rel_tol: f64,
}

fn default_rel_tol() -> f64 {
    Tolerance::DEFAULT_REL_TOL
}

impl TryFrom<RawTolerance> for Tolerance {
    type Error = ToleranceError;

    fn try_from(raw: RawTolerance) -> Result<Self, Self::Error> {
        Self::new(raw.rel_tol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::length::{meter, millimeter};

    #[test]
    fn rejects_invalid_bounds() {
        assert!(Tolerance::new(0.0).is_ok());
        assert!(Tolerance::new(1e-3).is_ok());
        assert_eq!(
            Tolerance::new(-1e-6),
            Err(ToleranceError::Invalid { rel_tol: -1e-6 })
        );
        assert!(Tolerance::new(f64::NAN).is_err());
        assert!(Tolerance::new(f64::INFINITY).is_err());
    }

    #[test]
    fn compares_across_units() {
        let tol = Tolerance::default();

        assert!(tol.is_close(
            Length::new::<meter>(1.0),
            Length::new::<millimeter>(1000.0)
        ));
        assert!(!tol.is_close(
            Length::new::<millimeter>(1000.0011),
            Length::new::<millimeter>(1000.0)
        ));
    }

    #[test]
    fn boundary_is_inclusive() {
        // Values chosen to be exact in binary floating point.
        let tol = Tolerance::new(0.5).unwrap();
        let m = Length::new::<meter>;

        assert!(tol.is_close(m(2.0), m(1.0)));
        assert!(tol.is_close(m(1.0), m(2.0)));
        assert!(!tol.is_close(m(2.000_001), m(1.0)));
    }

    #[test]
    fn zero_tolerance_requires_exact_match() {
        let tol = Tolerance::new(0.0).unwrap();
        let m = Length::new::<meter>;

        assert!(tol.is_close(m(0.25), m(0.25)));
        assert!(tol.is_close(m(0.0), m(0.0)));
        assert!(!tol.is_close(m(0.25), m(0.250_000_1)));
    }

    #[test]
    fn deserializes_with_default() {
        let tol: Tolerance = serde_json::from_str("{}").unwrap();
        assert_eq!(tol, Tolerance::default());

        let tol: Tolerance = serde_json::from_str(r#"{ "rel_tol": 1e-3 }"#).unwrap();
        assert_eq!(tol.rel_tol(), 1e-3);

        let result: Result<Tolerance, _> = serde_json::from_str(r#"{ "rel_tol": -1.0 }"#);
        assert!(result.is_err());
    }
}
