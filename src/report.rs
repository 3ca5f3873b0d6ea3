//! Text rendering of calculation results.

use crate::units::DisplayUnits;
use crate::{CalculationResult, Complex, LineParameters};

/// Renders a complex number as `"<real> ± j<|imag|>"`.
pub fn format_complex(value: Complex, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Renders a reflection coefficient in polar notation, `"|Γ| = <mag> ∠ <angle>°"`.
///
/// The angle is always printed with two decimals.
pub fn format_polar(magnitude: f64, angle_degrees: f64, decimals: usize) -> String {
    format!("|Γ| = {:.*} ∠ {:.2}°", decimals, magnitude, angle_degrees)
}

pub fn format_vswr(vswr: f64) -> String {
    if vswr == f64::INFINITY {
        "∞".to_string()
    } else {
        format!("{:.2}", vswr)
    }
}

pub fn format_return_loss(return_loss_db: f64) -> String {
    if return_loss_db == f64::INFINITY {
        "∞ dB".to_string()
    } else if return_loss_db.is_nan() {
        "Error".to_string()
    } else {
        format!("{:.1} dB", return_loss_db)
    }
}

/// Human-readable summary of an analysis.
pub struct Report<'a> {
    pub result: &'a CalculationResult,
    /// Units the input frequency and length are shown in.
    pub units: DisplayUnits,
}

impl<'a> Report<'a> {
    #[inline]
    pub fn new(result: &'a CalculationResult) -> Self {
        Self { result, units: DisplayUnits::default() }
    }

    #[inline]
    pub fn with_units(result: &'a CalculationResult, units: DisplayUnits) -> Self {
        Self { result, units }
    }
}

const RULE: &str = "==================================================";

impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let r = self.result;
        let LineParameters { z0, resistance, reactance, frequency, length } = r.parameters;
        let sign = if reactance >= 0.0 { "+" } else { "" };

        writeln!(f, "TRANSMISSION LINE ANALYSIS")?;
        writeln!(f, "{}", RULE)?;
        writeln!(f)?;
        writeln!(f, "Input parameters:")?;
        writeln!(f, "- Characteristic impedance (Z0): {} Ω", z0)?;
        writeln!(f, "- Load impedance: {} {}{}j Ω", resistance, sign, reactance)?;
        writeln!(
            f,
            "- Operating frequency: {} {}",
            self.units.frequency.from_si(frequency),
            self.units.frequency.label(),
        )?;
        writeln!(
            f,
            "- Line length: {} {}",
            self.units.length.from_si(length),
            self.units.length.label(),
        )?;
        writeln!(f)?;
        writeln!(f, "Results:")?;
        writeln!(f, "- Normalized impedance: {}", format_complex(r.normalized_impedance, 2))?;
        writeln!(
            f,
            "- Reflection coefficient (Γ): {}",
            format_complex(r.reflection_coefficient, 3),
        )?;
        writeln!(f, "  {}", format_polar(r.gamma_magnitude, r.gamma_angle_degrees, 3))?;
        writeln!(f, "- VSWR: {}", format_vswr(r.vswr))?;
        writeln!(f, "- Return loss: {}", format_return_loss(r.return_loss_db))?;
        writeln!(f, "- Wavelength: {:.2} m", r.wavelength)?;
        writeln!(f, "- First voltage maximum from load: {:.3} m", r.first_max_distance)?;
        writeln!(f, "- First voltage minimum from load: {:.3} m", r.first_min_distance)?;
        writeln!(f)?;
        writeln!(f, "Voltage maxima (Vmax):")?;
        for (i, pos) in r.voltage_max_positions.iter().enumerate() {
            writeln!(f, "  {}. {:.3} m", i + 1, pos)?;
        }
        writeln!(f)?;
        writeln!(f, "Voltage minima (Vmin):")?;
        for (i, pos) in r.voltage_min_positions.iter().enumerate() {
            writeln!(f, "  {}. {:.3} m", i + 1, pos)?;
        }
        writeln!(f)?;
        writeln!(f, "Note: the line is treated as ideal (lossless).")?;
        write!(f, "{}", RULE)
    }
}
