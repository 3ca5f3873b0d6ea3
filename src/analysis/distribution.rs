use crate::analysis::StandingWave;
use crate::{Complex, Error};

/// Voltage and current magnitudes sampled along the line.
///
/// Positions are measured from the generator. Both magnitude series are normalized to
/// their own peak; the peaks are kept in `max_voltage` and `max_current`.
#[derive(Clone, Debug, PartialEq)]
pub struct DistributionSample {
    pub positions: ndarray::Array1<f64>,
    pub voltages: ndarray::Array1<f64>,
    pub currents: ndarray::Array1<f64>,
    /// Peak `|V|` before normalization, relative to a unit incident wave.
    pub max_voltage: f64,
    /// Peak `|I|` before normalization, relative to a unit incident wave (no `Z0` scaling).
    pub max_current: f64,
}

impl DistributionSample {
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterates over `(position, voltage, current)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.positions
            .iter()
            .zip(self.voltages.iter())
            .zip(self.currents.iter())
            .map(|((&z, &v), &i)| (z, v, i))
    }
}

/// Samples `|V(z)|` and `|I(z)|` at `point_count + 1` evenly spaced positions.
///
/// With a unit incident wave, `V ∝ e^{-jβd} + Γe^{jβd}` and `I ∝ e^{-jβd} - Γe^{jβd}`
/// where `d` is the distance from the load.
pub fn sample<W: StandingWave + ?Sized>(
    wave: &W,
    point_count: usize,
) -> Result<DistributionSample, Error> {
    if point_count == 0 {
        return Err(Error::BadPointCount { point_count });
    }

    let gamma = wave.reflection_coefficient();
    let length = wave.length();
    let beta = wave.phase_constant();

    let positions = ndarray::Array1::from_shape_fn(point_count + 1, |i| {
        (i as f64 / point_count as f64) * length
    });

    let mut voltages = ndarray::Array1::<f64>::zeros(point_count + 1);
    let mut currents = ndarray::Array1::<f64>::zeros(point_count + 1);
    ndarray::Zip::from(&mut voltages)
        .and(&mut currents)
        .and(&positions)
        .for_each(|v, i, &z| {
            let phase = beta * (length - z);
            let incident = Complex::cis(-phase);
            let reflected = gamma * Complex::cis(phase);

            *v = (incident + reflected).magnitude();
            *i = (incident - reflected).magnitude();
        });

    let max_voltage = normalize(&mut voltages);
    let max_current = normalize(&mut currents);

    Ok(DistributionSample {
        positions,
        voltages,
        currents,
        max_voltage,
        max_current,
    })
}

/// Divides every sample by the series peak and returns that peak.
fn normalize(series: &mut ndarray::Array1<f64>) -> f64 {
    let peak = series.fold(f64::NEG_INFINITY, |accum, &item| accum.max(item));
    if peak > 0.0 {
        series.mapv_inplace(|x| x / peak);
    }
    peak
}
