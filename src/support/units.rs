//! Extensions to [`uom`].
//!
//! Public interfaces in this crate use [`uom`] quantities. This module adds
//! the two quantities the fireball models need that [`uom`] does not name,
//! and the explicit conversions between the unit scales the models compute in.
//!
//! ## Unit scales
//!
//! The temperature curve is calibrated against data digitized in
//! milliseconds and degrees Celsius, the radius law is written in seconds,
//! and the heat flux integrates over seconds. Each crossing between those
//! scales goes through one of the functions in [`conversions`] rather than a
//! literal factor inside a formula:
//!
//! ```
//! use fireball_models::support::units::conversions::{milliseconds, seconds};
//! use uom::si::{f64::Time, time::millisecond};
//!
//! let t = Time::new::<millisecond>(35.0);
//! assert!((milliseconds(t) - 35.0).abs() < 1e-12);
//! assert!((seconds(t) - 0.035).abs() < 1e-15);
//! ```

pub mod conversions;
mod quantities;

pub use quantities::{RadiantExposure, TemperatureRate};
