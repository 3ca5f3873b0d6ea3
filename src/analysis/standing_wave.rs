/// Voltage standing wave ratio for a reflection magnitude.
///
/// Total reflection (`|Γ| >= 1`) gives an infinite ratio.
#[inline]
pub fn vswr(gamma_magnitude: f64) -> f64 {
    if gamma_magnitude >= 1.0 {
        return f64::INFINITY;
    }
    (1.0 + gamma_magnitude) / (1.0 - gamma_magnitude)
}

/// Return loss in decibels, `-20 log10 |Γ|`.
///
/// Magnitudes at or below `floor` are treated as a perfect match and give an infinite
/// return loss. With `floor = 0.0` only an exactly zero magnitude does.
#[inline]
pub fn return_loss_db(gamma_magnitude: f64, floor: f64) -> f64 {
    if gamma_magnitude > floor {
        -20.0 * gamma_magnitude.log10()
    } else {
        f64::INFINITY
    }
}
