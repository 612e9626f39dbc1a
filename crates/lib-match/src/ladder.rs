//! Ladder validation by algebraic recomputation.
//!
//! Starting from the load resistance, the ladder is folded element by
//! element toward the source: series elements add their reactance, shunt
//! elements combine in parallel. The input impedance that falls out must be
//! the conjugate of the source impedance or the design is rejected outright.

use crate::error::{SynthesisError, SynthesisResult};
use lib_types::{Complex64, Impedance, LadderNetwork, Ohms};

/// Maximum tolerated conjugate-match error in ohms.
pub const MATCH_TOLERANCE: f64 = 1e-9;

/// Impedance seen looking into the ladder from the source side when it is
/// terminated by the resistive load `rl`.
pub fn input_impedance(ladder: &LadderNetwork, rl: Ohms) -> Impedance {
    let mut x = Complex64::new(rl.0, 0.0);

    for i in (0..ladder.reactances.len()).rev() {
        let xi = ladder.reactances[i];
        if ladder.is_series_at(i) {
            x += Complex64::new(0.0, xi);
        } else {
            // Parallel combination with an element of reactance xi. A zero
            // or infinite reactance degenerates under IEEE-754 rules rather
            // than panicking.
            x = (Complex64::new(0.0, -1.0 / xi) + x.inv()).inv();
        }
    }

    Impedance(x)
}

/// Check that the ladder conjugate-matches the source.
///
/// Returns the realized input impedance, which may differ from the ideal
/// conjugate by less than [`MATCH_TOLERANCE`]. A larger error means the
/// formulas did not close for this design point and the whole operation must
/// abort; it is never downgraded to a warning.
pub fn validate(ladder: &LadderNetwork, zg: Impedance, rl: Ohms) -> SynthesisResult<Impedance> {
    let zin = input_impedance(ladder, rl);
    let error = (zg.0 - zin.0.conj()).norm();

    if !(error < MATCH_TOLERANCE) {
        return Err(SynthesisError::ConjugateMismatch {
            error,
            tolerance: MATCH_TOLERANCE,
        });
    }

    tracing::debug!(%zin, error, "ladder conjugate-matches the source");

    Ok(zin)
}
