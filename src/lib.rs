//! Steady-state analysis of lossless transmission lines terminated in a complex load.
//!
//! Given the characteristic impedance, the load resistance and reactance, the operating
//! frequency and the physical length of a line, a [`Calculator`] derives the reflection
//! coefficient, VSWR, return loss, wavelength and the positions of the voltage maxima and
//! minima, and samples the voltage and current standing-wave pattern for plotting.
//!
//! To get started, refer to the `demos` directory in the main repository.

mod calculator;
mod session;

pub mod analysis;
pub mod complex;
pub mod prelude;
pub mod report;
pub mod units;

pub use calculator::{
    CalculationResult, Calculator, CalculatorConfig, LineParameters, SPEED_OF_LIGHT,
};
pub use complex::Complex;
pub use session::{Analysis, RunDescriptor, SaveSettings};

/// Identifies an input parameter of the line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Characteristic impedance.
    Z0,
    /// Load resistance.
    Resistance,
    /// Load reactance.
    Reactance,
    Frequency,
    Length,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Z0 => "characteristic impedance (Z0)",
            Field::Resistance => "load resistance (R)",
            Field::Reactance => "load reactance (X)",
            Field::Frequency => "frequency",
            Field::Length => "line length",
        };
        f.write_str(name)
    }
}

/// Represents an error in a calculation.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("The {field} must be between {min} and {max} ( got: {value} )")]
    OutOfRange {
        field: Field,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("The {field} must be greater than or equal to 0 ( got: {value} )")]
    NegativeValue { field: Field, value: f64 },
    #[error("The {field} must be greater than 0 ( got: {value} )")]
    NonPositive { field: Field, value: f64 },
    #[error("The {field} must be a finite number ( got: {value} )")]
    NotFinite { field: Field, value: f64 },
    #[error("The reflection coefficient is undefined for load impedance {load} \
        ( load cancels the characteristic impedance )")]
    DegenerateGeometry { load: Complex },
    #[error("Distribution point count must be greater than 0 ( got: {point_count} )")]
    BadPointCount { point_count: usize },
    #[error(transparent)]
    H5Error(#[from] hdf5::Error),
}

impl Error {
    /// The input parameter responsible for a validation error, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            Error::OutOfRange { field, .. }
            | Error::NegativeValue { field, .. }
            | Error::NonPositive { field, .. }
            | Error::NotFinite { field, .. } => Some(*field),
            _ => None,
        }
    }
}
