//! Supporting utilities used by the fireball models.
//!
//! These modules are public because they are useful on their own, but their
//! APIs are not yet stable.

pub mod constraint;
pub mod fit;
pub mod grid;
pub mod quadrature;
pub mod units;
