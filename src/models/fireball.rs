//! Fireball thermal radiation models.
//!
//! Four components turn explosive material and atmosphere parameters into
//! time- and distance-resolved radiant exposure:
//!
//! - [`RadiusModel`]: closed-form fireball growth per [`Material`].
//! - [`TemperatureModel`]: two-segment surface temperature curve, calibrated
//!   once from digitized observations.
//! - [`TransmissivityModel`]: atmospheric attenuation over a path length.
//! - [`HeatFluxPipeline`]: combines the three into flux and integrated exposure.
//!
//! None of the components depends on one above it. A typical client builds a
//! [`TimeGrid`](crate::support::grid::TimeGrid), evaluates a
//! [`FireballHistory`] once, and then asks the pipeline for exposure at as
//! many distances as needed.

pub mod heat_flux;
pub mod radius;
pub mod temperature;
pub mod transmissivity;

pub use heat_flux::{
    DistanceRange, ExposureDistance, ExposureDistanceConfig, ExposureDistanceError,
    ExposureProfile, FireballHistory, HeatFluxError, HeatFluxPipeline,
};
pub use radius::{
    GrowthState, Material, MaterialProfile, RadiusCoefficients, RadiusModel, UnknownMaterialError,
};
pub use temperature::{
    Calibration, CalibrationError, Continuity, DecaySearch, Sample, TemperatureConfig,
    TemperatureModel, TemperatureState,
};
pub use transmissivity::{AtmosphericConditions, TransmissivityModel};
