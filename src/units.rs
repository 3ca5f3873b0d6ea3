//! Scaling between user-facing units and the SI units used by the calculator.
//!
//! | Quantity  | Units            | SI   |
//! |-----------|------------------|------|
//! | frequency | Hz, kHz, MHz, GHz | Hz  |
//! | length    | m, cm, mm        | m    |

use crate::LineParameters;

/// Frequency unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrequencyUnit {
    Hz,
    KHz,
    MHz,
    GHz,
}

/// Length unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LengthUnit {
    Meter,
    Centimeter,
    Millimeter,
}

impl FrequencyUnit {
    /// Hertz per unit.
    pub fn factor(self) -> f64 {
        match self {
            FrequencyUnit::Hz => 1.0,
            FrequencyUnit::KHz => 1e3,
            FrequencyUnit::MHz => 1e6,
            FrequencyUnit::GHz => 1e9,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FrequencyUnit::Hz => "Hz",
            FrequencyUnit::KHz => "kHz",
            FrequencyUnit::MHz => "MHz",
            FrequencyUnit::GHz => "GHz",
        }
    }

    #[inline]
    pub fn to_si(self, value: f64) -> f64 {
        value * self.factor()
    }

    #[inline]
    pub fn from_si(self, value: f64) -> f64 {
        value / self.factor()
    }
}

impl LengthUnit {
    /// Meters per unit.
    pub fn factor(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Millimeter => 0.001,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Millimeter => "mm",
        }
    }

    #[inline]
    pub fn to_si(self, value: f64) -> f64 {
        value * self.factor()
    }

    #[inline]
    pub fn from_si(self, value: f64) -> f64 {
        value / self.factor()
    }
}

/// Units used when presenting parameters back to a user.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DisplayUnits {
    pub frequency: FrequencyUnit,
    pub length: LengthUnit,
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self {
            frequency: FrequencyUnit::MHz,
            length: LengthUnit::Meter,
        }
    }
}

impl LineParameters {
    /// Builds parameters from a frequency and length given in arbitrary units.
    pub fn from_units(
        z0: f64,
        resistance: f64,
        reactance: f64,
        frequency: f64,
        frequency_unit: FrequencyUnit,
        length: f64,
        length_unit: LengthUnit,
    ) -> Self {
        Self {
            z0,
            resistance,
            reactance,
            frequency: frequency_unit.to_si(frequency),
            length: length_unit.to_si(length),
        }
    }
}
