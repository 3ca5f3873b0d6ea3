use crate::analysis::{self, DistributionSample, StandingWave};
use crate::{Complex, Error, Field};

/// Speed of light in vacuum [m / s].
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Describes the line and its termination. All values are in SI units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineParameters {
    /// Characteristic impedance [Ω].
    pub z0: f64,
    /// Load resistance [Ω].
    pub resistance: f64,
    /// Load reactance [Ω].
    pub reactance: f64,
    /// Operating frequency [Hz].
    pub frequency: f64,
    /// Physical line length [m].
    pub length: f64,
}

impl Default for LineParameters {
    fn default() -> Self {
        Self {
            z0: 50.0,
            resistance: 75.0,
            reactance: 30.0,
            frequency: 100e6,
            length: 2.0,
        }
    }
}

impl LineParameters {
    #[inline]
    pub fn load_impedance(&self) -> Complex {
        Complex::new(self.resistance, self.reactance)
    }
}

/// Constants used by a `Calculator`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CalculatorConfig {
    /// Propagation velocity on the line [m / s]. The line is assumed ideal.
    pub speed_of_light: f64,
    /// Number of intervals used by `Calculator::sample_default`.
    pub default_point_count: usize,
    /// Smallest accepted characteristic impedance [Ω].
    pub z0_min: f64,
    /// Largest accepted characteristic impedance [Ω].
    pub z0_max: f64,
    /// Reflection magnitudes at or below this are reported with infinite return loss.
    pub min_reflection_magnitude: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            speed_of_light: SPEED_OF_LIGHT,
            default_point_count: 200,
            z0_min: 25.0,
            z0_max: 150.0,
            min_reflection_magnitude: 0.0,
        }
    }
}

/// Everything derived from one set of `LineParameters`.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculationResult {
    /// The inputs the result was derived from.
    pub parameters: LineParameters,
    /// `ZL = R + jX` [Ω].
    pub load_impedance: Complex,
    /// `ZL / Z0`.
    pub normalized_impedance: Complex,
    /// `Γ` at the load.
    pub reflection_coefficient: Complex,
    pub gamma_magnitude: f64,
    /// Angle of `Γ` in `(-π, π]`.
    pub gamma_angle_radians: f64,
    /// Angle of `Γ` in `[0, 360)`.
    pub gamma_angle_degrees: f64,
    pub vswr: f64,
    pub return_loss_db: f64,
    /// [m]
    pub wavelength: f64,
    /// Distance from the load to the first voltage maximum [m].
    pub first_max_distance: f64,
    /// Distance from the load to the first voltage minimum [m].
    pub first_min_distance: f64,
    /// Distances from the load of every voltage maximum on the line [m].
    pub voltage_max_positions: Vec<f64>,
    /// Distances from the load of every voltage minimum on the line [m].
    pub voltage_min_positions: Vec<f64>,
}

impl StandingWave for CalculationResult {
    #[inline]
    fn reflection_coefficient(&self) -> Complex {
        self.reflection_coefficient
    }
    #[inline]
    fn wavelength(&self) -> f64 {
        self.wavelength
    }
    #[inline]
    fn length(&self) -> f64 {
        self.parameters.length
    }
}

/// Derives the steady-state behavior of a terminated lossless line.
#[derive(Copy, Clone, Debug, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    /// Creates a new `Calculator` instance.
    #[inline]
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Checks the parameters, reporting only the first violation.
    pub fn validate(&self, params: &LineParameters) -> Result<(), Error> {
        let (min, max) = (self.config.z0_min, self.config.z0_max);

        // range checks first so that infinities land in their range category
        if params.z0 < min || params.z0 > max {
            return Err(Error::OutOfRange { field: Field::Z0, value: params.z0, min, max });
        }
        finite(Field::Z0, params.z0)?;
        if params.resistance < 0.0 {
            return Err(Error::NegativeValue { field: Field::Resistance, value: params.resistance });
        }
        finite(Field::Resistance, params.resistance)?;
        if params.frequency <= 0.0 {
            return Err(Error::NonPositive { field: Field::Frequency, value: params.frequency });
        }
        finite(Field::Frequency, params.frequency)?;
        if params.length <= 0.0 {
            return Err(Error::NonPositive { field: Field::Length, value: params.length });
        }
        finite(Field::Length, params.length)?;
        finite(Field::Reactance, params.reactance)?;

        Ok(())
    }

    /// Validates the parameters and derives a `CalculationResult` from them.
    pub fn calculate(&self, params: &LineParameters) -> Result<CalculationResult, Error> {
        self.validate(params)?;
        self.derive(params)
    }

    /// Derives a `CalculationResult` from parameters that already passed validation.
    pub fn derive(&self, params: &LineParameters) -> Result<CalculationResult, Error> {
        let load_impedance = params.load_impedance();
        let normalized_impedance = Complex::new(
            params.resistance / params.z0,
            params.reactance / params.z0,
        );

        let gamma = analysis::reflection_coefficient(load_impedance, params.z0)?;
        let gamma_magnitude = gamma.magnitude();
        let gamma_angle_radians = gamma.angle();

        let wavelength = self.config.speed_of_light / params.frequency;
        let extrema = analysis::voltage_extrema(gamma_angle_radians, wavelength, params.length);

        Ok(CalculationResult {
            parameters: *params,
            load_impedance,
            normalized_impedance,
            reflection_coefficient: gamma,
            gamma_magnitude,
            gamma_angle_radians,
            gamma_angle_degrees: analysis::angle_degrees(gamma_angle_radians),
            vswr: analysis::vswr(gamma_magnitude),
            return_loss_db: analysis::return_loss_db(
                gamma_magnitude,
                self.config.min_reflection_magnitude,
            ),
            wavelength,
            first_max_distance: extrema.first_max,
            first_min_distance: extrema.first_min,
            voltage_max_positions: extrema.max_positions,
            voltage_min_positions: extrema.min_positions,
        })
    }

    /// Samples the voltage and current distribution with `point_count` intervals.
    #[inline]
    pub fn sample_distribution(
        &self,
        result: &CalculationResult,
        point_count: usize,
    ) -> Result<DistributionSample, Error> {
        analysis::sample(result, point_count)
    }

    /// Samples the distribution with the configured default resolution.
    #[inline]
    pub fn sample_default(&self, result: &CalculationResult) -> Result<DistributionSample, Error> {
        self.sample_distribution(result, self.config.default_point_count)
    }
}

fn finite(field: Field, value: f64) -> Result<(), Error> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NotFinite { field, value })
    }
}
