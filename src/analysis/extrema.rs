use std::cmp::Ordering;
use std::f64::consts::PI;

/// Positions of the voltage maxima and minima, measured from the load.
#[derive(Clone, Debug, PartialEq)]
pub struct Extrema {
    /// Distance of the first maximum, within `[0, λ/2)`.
    pub first_max: f64,
    /// Distance of the first minimum, within `[0, λ/2)`.
    pub first_min: f64,
    /// Every maximum on the line, ascending.
    pub max_positions: Vec<f64>,
    /// Every minimum on the line, ascending.
    pub min_positions: Vec<f64>,
}

/// Locates the voltage extrema of the standing wave.
///
/// Maxima sit where the reflected wave returns in phase with the incident one, i.e. at
/// `d = -∠Γ·λ / 4π` modulo `λ/2`. Minima lie a quarter wavelength away.
///
/// Every extremum on the line is listed, so memory grows with `line_length / λ`; a
/// kilometre-long line at optical frequencies will not fit.
pub fn voltage_extrema(gamma_angle: f64, wavelength: f64, line_length: f64) -> Extrema {
    let half_wavelength = wavelength / 2.0;

    let first_max = fold_into_half_wave(-gamma_angle * wavelength / (4.0 * PI), half_wavelength);

    let mut first_min = first_max + half_wavelength / 2.0;
    if first_min >= half_wavelength {
        first_min -= half_wavelength;
    }

    Extrema {
        first_max,
        first_min,
        max_positions: positions_along(first_max, half_wavelength, line_length),
        min_positions: positions_along(first_min, half_wavelength, line_length),
    }
}

/// Folds a distance into `[0, half_wavelength)`.
#[inline]
pub fn fold_into_half_wave(distance: f64, half_wavelength: f64) -> f64 {
    let folded = distance.rem_euclid(half_wavelength);
    // rem_euclid may round up to the divisor for tiny negative inputs, and keeps -0.0
    if folded >= half_wavelength || folded == 0.0 {
        0.0
    } else {
        folded
    }
}

/// Generates `start + k·spacing` for every `k` that keeps the position within
/// `[0, line_length]`.
pub fn positions_along(start: f64, spacing: f64, line_length: f64) -> Vec<f64> {
    let in_range = matches!(start.partial_cmp(&line_length), Some(Ordering::Less | Ordering::Equal));
    if !in_range || spacing.is_nan() || spacing <= 0.0 {
        return Vec::new();
    }
    // one extra candidate in case the division rounds a position on the line end down
    let count = ((line_length - start) / spacing).floor() as usize;

    (0..=count.saturating_add(1))
        .map(|k| start + (k as f64) * spacing)
        .take_while(|&pos| pos <= line_length)
        .filter(|&pos| pos >= 0.0)
        .collect()
}
