//! # Fireball Models
//!
//! Fireball growth, surface temperature, atmospheric transmissivity and
//! thermal radiation exposure models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Units
//!
//! Public inputs and outputs are [`uom`] quantities. Calibration data is
//! digitized in milliseconds and °C; the conversions to seconds and Kelvin
//! live in [`support::units::conversions`] and nowhere else.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber.
//! Calibration results and sweep parameters are logged at `debug`, solver
//! trials at `trace`.
//!
//! Note: Modules in [`support`] are part of the public API because they're
//! useful, but their APIs are not stable.

pub mod models;
pub mod support;
