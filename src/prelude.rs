//! Includes commonly used library components.

pub use crate::{
    Analysis,
    CalculationResult,
    Calculator,
    CalculatorConfig,
    Complex,
    Error,
    Field,
    LineParameters,
    RunDescriptor,
    SaveSettings,
};
pub use crate::analysis::DistributionSample;
pub use crate::report::Report;
pub use crate::units::{DisplayUnits, FrequencyUnit, LengthUnit};
