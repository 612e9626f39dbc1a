//! Physical units with type safety.
//!
//! These newtypes provide compile-time unit checking to prevent
//! mixing incompatible quantities (e.g., adding Hertz to Ohms).

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Frequency in Hertz.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Hertz(pub f64);

impl Hertz {
    pub const ZERO: Self = Self(0.0);

    #[inline]
    pub fn from_khz(khz: f64) -> Self {
        Self(khz * 1e3)
    }

    #[inline]
    pub fn from_mhz(mhz: f64) -> Self {
        Self(mhz * 1e6)
    }

    #[inline]
    pub fn as_khz(&self) -> f64 {
        self.0 * 1e-3
    }

    #[inline]
    pub fn as_mhz(&self) -> f64 {
        self.0 * 1e-6
    }

    /// Angular frequency (omega = 2 * pi * f).
    #[inline]
    pub fn angular(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.0
    }
}

impl Add for Hertz {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Hertz {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Hertz {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for Hertz {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}

impl Div<Hertz> for Hertz {
    type Output = f64;
    fn div(self, rhs: Hertz) -> f64 {
        self.0 / rhs.0
    }
}

/// Resistance in Ohms.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Ohms(pub f64);

impl Ohms {
    /// Standard 50 ohm reference impedance.
    pub const Z0_50: Self = Self(50.0);

    /// Standard 75 ohm reference impedance.
    pub const Z0_75: Self = Self(75.0);
}

impl Add for Ohms {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul<f64> for Ohms {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

/// Capacitance in Farads.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Farads(pub f64);

impl Farads {
    #[inline]
    pub fn from_pf(pf: f64) -> Self {
        Self(pf * 1e-12)
    }

    #[inline]
    pub fn as_pf(&self) -> f64 {
        self.0 * 1e12
    }

    /// Capacitance realizing a capacitive (negative) reactance at `f`.
    ///
    /// C = -1 / (omega * X), so X < 0 yields a positive capacitance.
    #[inline]
    pub fn from_reactance(x: f64, f: Hertz) -> Self {
        Self(-1.0 / (f.angular() * x))
    }

    /// Reactance presented at frequency `f` (inverse of `from_reactance`).
    #[inline]
    pub fn reactance_at(&self, f: Hertz) -> f64 {
        -1.0 / (f.angular() * self.0)
    }
}

/// Inductance in Henries.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Henries(pub f64);

impl Henries {
    #[inline]
    pub fn from_nh(nh: f64) -> Self {
        Self(nh * 1e-9)
    }

    #[inline]
    pub fn as_nh(&self) -> f64 {
        self.0 * 1e9
    }

    /// Inductance realizing an inductive (positive) reactance at `f`.
    ///
    /// L = X / omega.
    #[inline]
    pub fn from_reactance(x: f64, f: Hertz) -> Self {
        Self(x / f.angular())
    }

    /// Reactance presented at frequency `f` (inverse of `from_reactance`).
    #[inline]
    pub fn reactance_at(&self, f: Hertz) -> f64 {
        f.angular() * self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mhz_round_trip() {
        let f = Hertz::from_mhz(7.0);
        assert!((f.0 - 7e6).abs() < 1e-6);
        assert!((f.as_mhz() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_capacitor_reactance_round_trip() {
        let f = Hertz::from_mhz(7.0);
        let x = -50.0;

        let c = Farads::from_reactance(x, f);
        assert!(c.0 > 0.0);
        assert!((c.as_pf() - 454.7284088).abs() < 1e-6);
        assert!((c.reactance_at(f) - x).abs() < 1e-12);
    }

    #[test]
    fn test_inductor_reactance_round_trip() {
        let f = Hertz::from_mhz(7.0);
        let x = 20.0;

        let l = Henries::from_reactance(x, f);
        assert!((l.as_nh() - 454.7284088).abs() < 1e-6);
        assert!((l.reactance_at(f) - x).abs() < 1e-12);
    }
}
