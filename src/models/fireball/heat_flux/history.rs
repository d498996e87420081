use uom::si::f64::{Length, ThermodynamicTemperature, Time};

use crate::{
    models::fireball::{RadiusModel, TemperatureModel},
    support::grid::TimeGrid,
};

use super::HeatFluxError;

/// Fireball temperature and diameter sampled on a common time grid.
///
/// The history does not depend on the receiver distance, so it is computed
/// once and shared by every distance of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct FireballHistory {
    times: Vec<Time>,
    temperatures: Vec<ThermodynamicTemperature>,
    diameters: Vec<Length>,
}

impl FireballHistory {
    /// Bundles externally computed series.
    ///
    /// # Errors
    ///
    /// Returns [`HeatFluxError::MismatchedSeries`] if the series are not all
    /// the same length as `times`.
    pub fn new(
        times: Vec<Time>,
        temperatures: Vec<ThermodynamicTemperature>,
        diameters: Vec<Length>,
    ) -> Result<Self, HeatFluxError> {
        for found in [temperatures.len(), diameters.len()] {
            if found != times.len() {
                return Err(HeatFluxError::MismatchedSeries {
                    expected: times.len(),
                    found,
                });
            }
        }
        Ok(Self {
            times,
            temperatures,
            diameters,
        })
    }

    /// Evaluates both models over `grid`.
    #[must_use]
    pub fn evaluate(temperature: &TemperatureModel, radius: &RadiusModel, grid: &TimeGrid) -> Self {
        Self {
            times: grid.times().to_vec(),
            temperatures: temperature.temperatures(grid.times()),
            diameters: radius.diameters(grid.times()),
        }
    }

    #[must_use]
    pub fn times(&self) -> &[Time] {
        &self.times
    }

    #[must_use]
    pub fn temperatures(&self) -> &[ThermodynamicTemperature] {
        &self.temperatures
    }

    #[must_use]
    pub fn diameters(&self) -> &[Length] {
        &self.diameters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{length::meter, thermodynamic_temperature::kelvin, time::millisecond};

    #[test]
    fn rejects_misaligned_series() {
        let times = vec![Time::new::<millisecond>(0.0), Time::new::<millisecond>(1.0)];
        let temperatures = vec![ThermodynamicTemperature::new::<kelvin>(1400.0)];
        let diameters = vec![Length::new::<meter>(3.0); 2];

        assert_eq!(
            FireballHistory::new(times, temperatures, diameters),
            Err(HeatFluxError::MismatchedSeries {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn evaluation_follows_grid() {
        let temperature = TemperatureModel::new(Default::default()).unwrap();
        let radius = RadiusModel::for_material(crate::models::fireball::Material::Polyurethane);
        let grid = TimeGrid::linspace(
            Time::new::<millisecond>(0.0),
            Time::new::<millisecond>(140.0),
            15,
        );

        let history = FireballHistory::evaluate(&temperature, &radius, &grid);
        assert_eq!(history.len(), 15);
        assert_eq!(history.temperatures()[0], temperature.temperature(grid.times()[0]));
        assert_eq!(history.diameters()[14], radius.diameter(grid.times()[14]));
    }
}
