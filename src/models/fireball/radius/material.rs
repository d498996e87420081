use std::{fmt, str::FromStr};

use thiserror::Error;
use uom::si::{f64::Length, length::meter};

use super::RadiusCoefficients;

/// Amplitude fraction `B`, shared by every tabulated material.
pub const AMPLITUDE: f64 = 0.41;

/// Decay constant `C` of the tabulated fits, in ms⁻².
pub const DECAY_PER_SQUARE_MS: f64 = 0.05;

/// The error returned when a material selector is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown material: {name:?}")]
pub struct UnknownMaterialError {
    /// The selector that failed to match.
    pub name: String,
}

/// Explosive casing materials with fitted fireball expansion coefficients.
///
/// Selectors parse from their table names:
///
/// ```
/// use fireball_models::models::fireball::Material;
///
/// let material: Material = "40%Al/Rubber".parse().unwrap();
/// assert_eq!(material, Material::Aluminum40Rubber);
/// assert!("Steel".parse::<Material>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Material {
    Polyurethane,
    Aluminum30Rubber,
    Aluminum40Rubber,
    Aluminum50Rubber,
    Aluminum60Rubber,
}

impl Material {
    /// Every tabulated material, in table order.
    pub const ALL: [Material; 5] = [
        Material::Polyurethane,
        Material::Aluminum30Rubber,
        Material::Aluminum40Rubber,
        Material::Aluminum50Rubber,
        Material::Aluminum60Rubber,
    ];

    /// Returns the material's table entry.
    #[must_use]
    pub fn profile(self) -> &'static MaterialProfile {
        match self {
            Material::Polyurethane => &PROFILES[0],
            Material::Aluminum30Rubber => &PROFILES[1],
            Material::Aluminum40Rubber => &PROFILES[2],
            Material::Aluminum50Rubber => &PROFILES[3],
            Material::Aluminum60Rubber => &PROFILES[4],
        }
    }

    /// Returns the selector name, e.g. `"30%Al/Rubber"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.profile().name
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Material {
    type Err = UnknownMaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Material::ALL
            .into_iter()
            .find(|material| material.name() == s)
            .ok_or_else(|| UnknownMaterialError { name: s.to_owned() })
    }
}

impl TryFrom<&str> for Material {
    type Error = UnknownMaterialError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Fitted expansion coefficients and fit quality for one material.
///
/// Two asymptotic radii were fitted: `K1` from a first-order fit and `K2`
/// from a quadratic fit. The radius model uses `K2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProfile {
    name: &'static str,
    description: &'static str,
    first_order_radius_m: f64,
    asymptotic_radius_m: f64,
    amplitude: f64,
    decay_per_square_ms: f64,
    first_order_precision_percent: f64,
    quadratic_precision_percent: f64,
}

static PROFILES: [MaterialProfile; 5] = [
    MaterialProfile {
        name: "Polyurethane",
        description: "polyurethane",
        first_order_radius_m: 2.87,
        asymptotic_radius_m: 2.86,
        amplitude: AMPLITUDE,
        decay_per_square_ms: DECAY_PER_SQUARE_MS,
        first_order_precision_percent: 94.99,
        quadratic_precision_percent: 95.90,
    },
    MaterialProfile {
        name: "30%Al/Rubber",
        description: "30% aluminium powder in rubber",
        first_order_radius_m: 3.03,
        asymptotic_radius_m: 3.04,
        amplitude: AMPLITUDE,
        decay_per_square_ms: DECAY_PER_SQUARE_MS,
        first_order_precision_percent: 96.44,
        quadratic_precision_percent: 96.76,
    },
    MaterialProfile {
        name: "40%Al/Rubber",
        description: "40% aluminium powder in rubber",
        first_order_radius_m: 3.13,
        asymptotic_radius_m: 3.15,
        amplitude: AMPLITUDE,
        decay_per_square_ms: DECAY_PER_SQUARE_MS,
        first_order_precision_percent: 96.70,
        quadratic_precision_percent: 96.90,
    },
    MaterialProfile {
        name: "50%Al/Rubber",
        description: "50% aluminium powder in rubber",
        first_order_radius_m: 3.07,
        asymptotic_radius_m: 3.04,
        amplitude: AMPLITUDE,
        decay_per_square_ms: DECAY_PER_SQUARE_MS,
        first_order_precision_percent: 97.95,
        quadratic_precision_percent: 97.90,
    },
    MaterialProfile {
        name: "60%Al/Rubber",
        description: "60% aluminium powder in rubber",
        first_order_radius_m: 2.92,
        asymptotic_radius_m: 2.93,
        amplitude: AMPLITUDE,
        decay_per_square_ms: DECAY_PER_SQUARE_MS,
        first_order_precision_percent: 91.77,
        quadratic_precision_percent: 93.34,
    },
];

impl MaterialProfile {
    /// Selector name used in the table.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Human-readable description of the material.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Asymptotic radius `K` (the quadratic-fit `K2`).
    #[must_use]
    pub fn asymptotic_radius(&self) -> Length {
        Length::new::<meter>(self.asymptotic_radius_m)
    }

    /// Asymptotic radius from the first-order fit (`K1`).
    #[must_use]
    pub fn first_order_radius(&self) -> Length {
        Length::new::<meter>(self.first_order_radius_m)
    }

    /// Amplitude fraction `B`.
    #[must_use]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Decay constant `C` in ms⁻².
    #[must_use]
    pub fn decay_per_square_ms(&self) -> f64 {
        self.decay_per_square_ms
    }

    /// Fit precision of the first-order and quadratic fits, in percent.
    #[must_use]
    pub fn fit_precision_percent(&self) -> (f64, f64) {
        (
            self.first_order_precision_percent,
            self.quadratic_precision_percent,
        )
    }

    /// Radius law coefficients for this material.
    #[must_use]
    pub fn coefficients(&self) -> RadiusCoefficients {
        RadiusCoefficients::new_unchecked(
            self.asymptotic_radius(),
            self.amplitude,
            self.decay_per_square_ms,
        )
    }
}
