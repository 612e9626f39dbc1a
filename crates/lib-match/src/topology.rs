//! Matching-network topologies and their synthesis formulas.
//!
//! Each topology maps `(Zg, Rl, Q)` to a reactance triple in closed form.
//! Signs carry the element type (negative capacitive, positive inductive);
//! the series/shunt alternation is fixed by the topology's starting kind.

use crate::error::{SynthesisError, SynthesisResult};
use lib_types::{FirstElement, Impedance, LadderNetwork, Ohms};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The supported three-element matching topologies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// Series L, shunt C, series C. Source resistance must be below the load.
    ///
    /// ```text
    /// o--L1--+--C2--o
    ///        C1
    /// ```
    Lcc,

    /// Shunt C, series L, shunt C.
    ///
    /// ```text
    /// o--+--L1--+--o
    ///    C1     C2
    /// ```
    Pi,

    /// Series L, shunt C, series L. Tolerates either impedance ordering.
    ///
    /// ```text
    /// o--L1--+--L2--o
    ///        C1
    /// ```
    Tee,
}

impl Topology {
    /// Position kind of the element adjacent to the source.
    pub fn first_element(&self) -> FirstElement {
        match self {
            Self::Lcc | Self::Tee => FirstElement::Series,
            Self::Pi => FirstElement::Shunt,
        }
    }

    /// Synthesize a ladder matching `zg` to the resistive load `rl` at
    /// quality factor `q`.
    pub fn synthesize(&self, zg: Impedance, rl: Ohms, q: f64) -> SynthesisResult<LadderNetwork> {
        let reactances = match self {
            Self::Lcc => synthesize_lcc(zg, rl.0, q)?,
            Self::Pi => synthesize_pi(zg, rl.0, q)?,
            Self::Tee => synthesize_tee(zg, rl.0, q)?,
        };

        tracing::debug!(?reactances, topology = %self, "synthesized matching ladder");

        Ok(LadderNetwork::new(reactances, self.first_element()))
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lcc => write!(f, "LCC"),
            Self::Pi => write!(f, "PI"),
            Self::Tee => write!(f, "TEE"),
        }
    }
}

/// Square root of a formula radicand. A negative radicand means the
/// requested Q cannot be realized for the given impedance ratio.
fn checked_sqrt(radicand: f64, q: f64) -> SynthesisResult<f64> {
    if radicand < 0.0 {
        return Err(SynthesisError::UnreachableQ { q, radicand });
    }
    Ok(radicand.sqrt())
}

fn synthesize_lcc(zg: Impedance, rl: f64, q: f64) -> SynthesisResult<[f64; 3]> {
    let rg = zg.resistance();
    if rg >= rl {
        return Err(SynthesisError::SourceResistanceTooHigh { rg, rl });
    }

    let b = rg * (q * q + 1.0);
    let a = checked_sqrt(b / rl - 1.0, q)?;

    let xl1 = q * rg - zg.reactance();
    let xc1 = b / (q - a);
    let xc2 = a * rl;

    Ok([xl1, -xc1, -xc2])
}

fn synthesize_pi(zg: Impedance, rl: f64, q: f64) -> SynthesisResult<[f64; 3]> {
    let (rg, xg) = zg.to_parallel();
    if rg < rl {
        tracing::warn!(
            rg,
            rl,
            "parallel source resistance below the load; the series inductor will be very small"
        );
    }

    // First shunt capacitor absorbs the parallel source reactance.
    let xc1 = rg / q;
    let xc1 = 1.0 / (1.0 / xc1 + 1.0 / xg);

    let ratio = rg / rl;
    let xc2 = rl * checked_sqrt(ratio / (q * q + 1.0 - ratio), q)?;
    let xl1 = (q * rg + rg * rl / xc2) / (q * q + 1.0);

    Ok([-xc1, xl1, -xc2])
}

fn synthesize_tee(zg: Impedance, rl: f64, q: f64) -> SynthesisResult<[f64; 3]> {
    let rg = zg.resistance();

    let a = rg * (q * q + 1.0);
    let b = checked_sqrt(a / rl - 1.0, q)?;

    let xl1 = q * rg - zg.reactance();
    let xc1 = a / (q + b);
    let xl2 = rl * b;

    Ok([xl1, -xc1, xl2])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_lcc_synthesis() {
        let ladder = Topology::Lcc
            .synthesize(Impedance::new(10.0, 10.0), Ohms(50.0), 3.0)
            .unwrap();

        assert_eq!(ladder.first, FirstElement::Series);
        assert!(close(ladder.reactances[0], 20.0));
        assert!(close(ladder.reactances[1], -50.0));
        assert!(close(ladder.reactances[2], -50.0));
    }

    #[test]
    fn test_lcc_rejects_high_source_resistance() {
        let err = Topology::Lcc
            .synthesize(Impedance::new(1000.0, -100.0), Ohms(50.0), 3.0)
            .unwrap_err();

        assert!(matches!(
            err,
            SynthesisError::SourceResistanceTooHigh { rg, rl } if rg == 1000.0 && rl == 50.0
        ));
    }

    #[test]
    fn test_lcc_rejects_unreachable_q() {
        // b/rl - 1 = 10*2/50 - 1 < 0
        let err = Topology::Lcc
            .synthesize(Impedance::new(10.0, 10.0), Ohms(50.0), 1.0)
            .unwrap_err();

        assert!(matches!(err, SynthesisError::UnreachableQ { q, .. } if q == 1.0));
    }

    #[test]
    fn test_lcc_accepts_knife_edge_radicand() {
        // Re(Zg)*(Q^2+1) == Rl makes the radicand exactly zero.
        let ladder = Topology::Lcc
            .synthesize(Impedance::resistive(10.0), Ohms(50.0), 2.0)
            .unwrap();

        assert!(close(ladder.reactances[0], 20.0));
        assert!(close(ladder.reactances[1], -25.0));
        assert!(close(ladder.reactances[2], 0.0));
    }

    #[test]
    fn test_pi_synthesis() {
        let ladder = Topology::Pi
            .synthesize(Impedance::new(1000.0, -100.0), Ohms(50.0), 5.0)
            .unwrap();

        assert_eq!(ladder.first, FirstElement::Shunt);
        assert!((ladder.reactances[0] + 206.122448979592).abs() < 1e-9);
        assert!((ladder.reactances[1] - 215.0462448119).abs() < 1e-9);
        assert!((ladder.reactances[2] + 93.3107526050676).abs() < 1e-9);
    }

    #[test]
    fn test_pi_impractical_configuration_still_synthesizes() {
        // Parallel source resistance 20 ohm is below the 50 ohm load; the
        // design is warned about but not rejected.
        let ladder = Topology::Pi
            .synthesize(Impedance::new(10.0, 10.0), Ohms(50.0), 3.0)
            .unwrap();

        assert!(close(ladder.reactances[0], -5.0));
        assert!((ladder.reactances[1] - 15.797958971132715).abs() < 1e-9);
        assert!((ladder.reactances[2] + 10.206207261596575).abs() < 1e-9);
    }

    #[test]
    fn test_tee_synthesis() {
        let ladder = Topology::Tee
            .synthesize(Impedance::new(10.0, 10.0), Ohms(50.0), 3.0)
            .unwrap();

        assert_eq!(ladder.first, FirstElement::Series);
        assert!(close(ladder.reactances[0], 20.0));
        assert!(close(ladder.reactances[1], -25.0));
        assert!(close(ladder.reactances[2], 50.0));
    }

    #[test]
    fn test_tee_tolerates_high_source_resistance() {
        // Unlike LCC, TEE accepts Rg > Rl.
        let ladder = Topology::Tee
            .synthesize(Impedance::new(1000.0, -100.0), Ohms(50.0), 3.0)
            .unwrap();

        assert!(ladder.reactances[0] > 0.0);
        assert!(ladder.reactances[1] < 0.0);
        assert!(ladder.reactances[2] > 0.0);
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let zg = Impedance::new(10.0, 10.0);
        let a = Topology::Tee.synthesize(zg, Ohms(50.0), 3.0).unwrap();
        let b = Topology::Tee.synthesize(zg, Ohms(50.0), 3.0).unwrap();

        for i in 0..3 {
            assert_eq!(a.reactances[i].to_bits(), b.reactances[i].to_bits());
        }
    }
}
