//! Complex impedance representation.
//!
//! An impedance is `R + jX`: a resistance plus a signed reactance. Negative
//! reactance is capacitive, positive is inductive, and that sign convention
//! holds everywhere in the workspace.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A complex impedance `R + jX` in ohms.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Impedance(pub Complex64);

impl Impedance {
    /// Build an impedance from resistance and reactance.
    #[inline]
    pub fn new(resistance: f64, reactance: f64) -> Self {
        Self(Complex64::new(resistance, reactance))
    }

    /// Purely resistive impedance.
    #[inline]
    pub fn resistive(resistance: f64) -> Self {
        Self::new(resistance, 0.0)
    }

    /// Resistance (real part).
    #[inline]
    pub fn resistance(&self) -> f64 {
        self.0.re
    }

    /// Reactance (imaginary part).
    #[inline]
    pub fn reactance(&self) -> f64 {
        self.0.im
    }

    /// Whether the reactance is exactly zero.
    #[inline]
    pub fn is_resistive(&self) -> bool {
        self.0.im == 0.0
    }

    /// Complex conjugate.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self(self.0.conj())
    }

    /// Equivalent parallel form of this series impedance.
    ///
    /// Returns `(Rp, Xp)` such that a resistor `Rp` in parallel with a
    /// reactance `Xp` presents the same impedance:
    ///
    /// ```text
    /// Rp = Rs * (1 + (Xs/Rs)^2)
    /// Xp = Rp / (Xs/Rs)
    /// ```
    ///
    /// The resistance must be non-zero. A purely resistive impedance has no
    /// parallel reactive element; the division yields an infinite `Xp` under
    /// IEEE-754 semantics, which downstream formulas fold away naturally, so
    /// no special casing is done here.
    pub fn to_parallel(&self) -> (f64, f64) {
        let rs = self.0.re;
        let xs = self.0.im;
        let rp = rs * (1.0 + (xs / rs).powi(2));
        let xp = rp / (xs / rs);
        (rp, xp)
    }
}

impl From<Complex64> for Impedance {
    fn from(z: Complex64) -> Self {
        Self(z)
    }
}

impl fmt::Display for Impedance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.im < 0.0 {
            write!(f, "{}-{}j", self.0.re, -self.0.im)
        } else {
            write!(f, "{}+{}j", self.0.re, self.0.im)
        }
    }
}
