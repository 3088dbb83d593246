use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N2, P6, Z0},
};

/// Result of `coefficient · h³ · Δp / μ`, m⁶/s² in SI.
///
/// While pad flow coefficients are carried in volume-rate units the product
/// has this dimension rather than m³/s.
pub type HydrostaticFlow = Quantity<ISQ<P6, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
