//! Subcircuit netlist emission.
//!
//! Converts a reactance ladder into frequency-scaled capacitors and
//! inductors with ladder node numbers, rendered as a SPICE `.subckt` block:
//!
//! ```text
//! .subckt network 1 3
//! L1 1 2 454.728nH
//! C2 2 0 454.728pF
//! C3 2 3 454.728pF
//! .ends
//! ```
//!
//! Node 1 is the source terminal; a series element advances to a fresh node,
//! a shunt element ties the current node to ground (node 0). Designators are
//! numbered by ladder position, so an LCC network reads `L1, C2, C3`.

use crate::eng::sig6;
use crate::error::SpiceError;
use lib_types::{Farads, Henries, Hertz, LadderNetwork};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One emitted ladder element.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Element {
    Capacitor {
        /// 1-based ladder position.
        index: usize,
        /// Connected nodes, ground being node 0.
        nodes: (u32, u32),
        value: Farads,
    },
    Inductor {
        index: usize,
        nodes: (u32, u32),
        value: Henries,
    },
}

impl Element {
    /// SPICE designator, e.g. `C2`.
    pub fn designator(&self) -> String {
        match self {
            Self::Capacitor { index, .. } => format!("C{index}"),
            Self::Inductor { index, .. } => format!("L{index}"),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capacitor { nodes, value, .. } => write!(
                f,
                "{} {} {} {}pF",
                self.designator(),
                nodes.0,
                nodes.1,
                sig6(value.as_pf())
            ),
            Self::Inductor { nodes, value, .. } => write!(
                f,
                "{} {} {} {}nH",
                self.designator(),
                nodes.0,
                nodes.1,
                sig6(value.as_nh())
            ),
        }
    }
}

/// A complete matching subcircuit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subcircuit {
    pub name: String,
    pub elements: Vec<Element>,
    /// The load-side terminal node.
    pub last_node: u32,
}

impl Subcircuit {
    /// Scale a ladder to component values at the design frequency.
    ///
    /// The caller decides the ladder orientation: a reversed ladder emits the
    /// mirror image of the forward one, and node 1 is always whichever end
    /// the caller presents first.
    pub fn from_ladder(
        ladder: &LadderNetwork,
        f: Hertz,
        name: impl Into<String>,
    ) -> Result<Self, SpiceError> {
        if !(f.0 > 0.0) {
            return Err(SpiceError::NonPositiveFrequency(f.0));
        }

        let mut node = 1u32;
        let mut elements = Vec::with_capacity(ladder.reactances.len());

        for (n, &x) in ladder.reactances.iter().enumerate() {
            let a = node;
            let b = if ladder.is_series_at(n) {
                node += 1;
                node
            } else {
                0
            };

            let element = if x < 0.0 {
                Element::Capacitor {
                    index: n + 1,
                    nodes: (a, b),
                    value: Farads::from_reactance(x, f),
                }
            } else {
                Element::Inductor {
                    index: n + 1,
                    nodes: (a, b),
                    value: Henries::from_reactance(x, f),
                }
            };
            elements.push(element);
        }

        Ok(Self {
            name: name.into(),
            elements,
            last_node: node,
        })
    }
}

impl fmt::Display for Subcircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ".subckt {} 1 {}", self.name, self.last_node)?;
        for element in &self.elements {
            writeln!(f, "{element}")?;
        }
        write!(f, ".ends")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_types::FirstElement;

    fn lcc_ladder() -> LadderNetwork {
        LadderNetwork::new([20.0, -50.0, -50.0], FirstElement::Series)
    }

    fn tee_ladder() -> LadderNetwork {
        LadderNetwork::new([20.0, -25.0, 50.0], FirstElement::Series)
    }

    fn pi_ladder() -> LadderNetwork {
        LadderNetwork::new(
            [-206.122448979592, 215.0462448119, -93.3107526050676],
            FirstElement::Shunt,
        )
    }

    #[test]
    fn test_lcc_subcircuit() {
        let sub = Subcircuit::from_ladder(&lcc_ladder(), Hertz(7e6), "network").unwrap();

        assert_eq!(sub.last_node, 3);
        assert_eq!(sub.elements.len(), 3);
        assert_eq!(
            sub.to_string(),
            ".subckt network 1 3\n\
             L1 1 2 454.728nH\n\
             C2 2 0 454.728pF\n\
             C3 2 3 454.728pF\n\
             .ends"
        );
    }

    #[test]
    fn test_pi_subcircuit_nodes() {
        let sub = Subcircuit::from_ladder(&pi_ladder(), Hertz(7e6), "pi_output").unwrap();

        assert_eq!(sub.last_node, 2);
        assert_eq!(
            sub.to_string(),
            ".subckt pi_output 1 2\n\
             C1 1 0 110.305pF\n\
             L2 1 2 4889.38nH\n\
             C3 2 0 243.663pF\n\
             .ends"
        );
    }

    #[test]
    fn test_reversed_emission_is_mirror_image() {
        let forward = Subcircuit::from_ladder(&tee_ladder(), Hertz(7e6), "tee").unwrap();
        let reverse =
            Subcircuit::from_ladder(&tee_ladder().reversed(), Hertz(7e6), "tee").unwrap();

        assert_eq!(
            forward.to_string(),
            ".subckt tee 1 3\n\
             L1 1 2 454.728nH\n\
             C2 2 0 909.457pF\n\
             L3 2 3 1136.82nH\n\
             .ends"
        );
        assert_eq!(
            reverse.to_string(),
            ".subckt tee 1 3\n\
             L1 1 2 1136.82nH\n\
             C2 2 0 909.457pF\n\
             L3 2 3 454.728nH\n\
             .ends"
        );

        // Same node graph, element values reflected end for end.
        let fwd: Vec<_> = forward.elements.iter().map(Element::to_string).collect();
        let rev: Vec<_> = reverse.elements.iter().map(Element::to_string).collect();
        assert_eq!(fwd[1], rev[1]);
        assert_eq!(fwd[0].split(' ').last(), rev[2].split(' ').last());
    }

    #[test]
    fn test_rejects_missing_frequency() {
        let err = Subcircuit::from_ladder(&lcc_ladder(), Hertz::ZERO, "network").unwrap_err();
        assert!(matches!(err, SpiceError::NonPositiveFrequency(_)));
    }
}
