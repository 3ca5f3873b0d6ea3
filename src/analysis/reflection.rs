use crate::{Complex, Error};

/// Computes `Γ = (ZL - Z0) / (ZL + Z0)` for a real characteristic impedance.
///
/// A load of exactly `-Z0` makes the denominator vanish; that case is reported as
/// [`Error::DegenerateGeometry`] instead of producing NaN.
pub fn reflection_coefficient(load: Complex, z0: f64) -> Result<Complex, Error> {
    let z0 = Complex::from(z0);

    (load - z0)
        .checked_div(load + z0)
        .ok_or(Error::DegenerateGeometry { load })
}

/// Converts an angle in radians from `atan2` into degrees within `[0, 360)`.
#[inline]
pub fn angle_degrees(radians: f64) -> f64 {
    (radians.to_degrees() + 360.0) % 360.0
}
