//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules. Each component is
//! usable directly through its own API, and also implements
//! [`twine_core::Model`] as a thin adapter that delegates to that API.

pub mod fireball;
