//! Closed-form steady-state analysis of a terminated lossless line.

mod distribution;
mod extrema;
mod reflection;
mod standing_wave;

pub use distribution::{sample, DistributionSample};
pub use extrema::{fold_into_half_wave, positions_along, voltage_extrema, Extrema};
pub use reflection::{angle_degrees, reflection_coefficient};
pub use standing_wave::{return_loss_db, vswr};

use crate::Complex;

/// Describes the standing wave set up on a terminated line.
pub trait StandingWave {
    /// Reflection coefficient at the load.
    fn reflection_coefficient(&self) -> Complex;
    fn wavelength(&self) -> f64;
    fn length(&self) -> f64;
    /// Phase constant `β = 2π / λ`.
    fn phase_constant(&self) -> f64 {
        2.0 * std::f64::consts::PI / self.wavelength()
    }
}
