use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, Z0},
};

/// Rate of change of temperature, K/s in SI.
pub type TemperatureRate = Quantity<ISQ<Z0, Z0, N1, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Radiant exposure (time-integrated heat flux density), J/m² in SI.
pub type RadiantExposure = Quantity<ISQ<Z0, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
