//! A small complex number type for impedances and wave phasors.

use std::ops::{Add, Mul, Neg, Sub};

/// A complex number stored in rectangular form.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { real: 0.0, imag: 0.0 };
    pub const ONE: Complex = Complex { real: 1.0, imag: 0.0 };

    #[inline]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Unit phasor `e^{jφ}`.
    #[inline]
    pub fn cis(phase: f64) -> Self {
        let (sin, cos) = phase.sin_cos();
        Self { real: cos, imag: sin }
    }

    #[inline]
    pub fn conj(self) -> Self {
        Self { real: self.real, imag: -self.imag }
    }

    #[inline]
    pub fn scale(self, factor: f64) -> Self {
        Self { real: self.real * factor, imag: self.imag * factor }
    }

    #[inline]
    pub fn norm_sqr(self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[inline]
    pub fn magnitude(self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Angle in radians, in `(-π, π]`.
    #[inline]
    pub fn angle(self) -> f64 {
        self.imag.atan2(self.real)
    }

    /// Divides by `rhs`, or returns `None` when `rhs` is zero.
    pub fn checked_div(self, rhs: Complex) -> Option<Complex> {
        let denom = rhs.norm_sqr();
        if denom == 0.0 {
            return None;
        }
        let num = self * rhs.conj();
        Some(Complex {
            real: num.real / denom,
            imag: num.imag / denom,
        })
    }

    pub fn is_finite(self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}

impl From<f64> for Complex {
    fn from(real: f64) -> Self {
        Self { real, imag: 0.0 }
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex {
            real: self.real + rhs.real,
            imag: self.imag + rhs.imag,
        }
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Complex {
            real: self.real - rhs.real,
            imag: self.imag - rhs.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex {
            real: self.real * rhs.real - self.imag * rhs.imag,
            imag: self.real * rhs.imag + self.imag * rhs.real,
        }
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex { real: -self.real, imag: -self.imag }
    }
}

impl std::fmt::Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.imag >= 0.0 { '+' } else { '-' };
        match f.precision() {
            Some(p) => write!(f, "{:.*} {} j{:.*}", p, self.real, sign, p, self.imag.abs()),
            None => write!(f, "{} {} j{}", self.real, sign, self.imag.abs()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_conjugate() {
        let q = Complex::new(0.5, 0.6).checked_div(Complex::new(2.5, 0.6)).unwrap();
        assert!((q.real - 1.61 / 6.61).abs() < 1e-12);
        assert!((q.imag - 1.2 / 6.61).abs() < 1e-12);
    }

    #[test]
    fn division_by_zero_is_none() {
        assert_eq!(Complex::ONE.checked_div(Complex::ZERO), None);
    }

    #[test]
    fn zero_has_zero_angle() {
        assert_eq!(Complex::ZERO.angle(), 0.0);
        assert_eq!(Complex::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn display_uses_precision() {
        assert_eq!(format!("{:.2}", Complex::new(1.5, -0.6)), "1.50 - j0.60");
    }
}
