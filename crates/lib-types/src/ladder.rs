//! Ladder-network primitives.
//!
//! A matching ladder is a chain of three reactive elements between the source
//! and the load, strictly alternating between series and shunt positions.
//! Whether the chain leads with a series or a shunt element depends on the
//! topology that synthesized it, so the starting kind travels with the
//! reactances; it cannot be recovered from the numbers alone.

use serde::{Deserialize, Serialize};

/// Which position kind a ladder presents at its source end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstElement {
    /// First element is in the signal path.
    Series,
    /// First element is across the signal path to ground.
    Shunt,
}

impl FirstElement {
    /// Whether the element at `index` (0-based from the source end) sits in
    /// series. Even indices take the starting kind, odd indices the opposite.
    ///
    /// Both the validator and the netlist emitter go through this one
    /// helper, so the alternation can never disagree between them.
    #[inline]
    pub fn is_series_at(&self, index: usize) -> bool {
        (index % 2 == 0) == matches!(self, Self::Series)
    }
}

/// A synthesized three-element matching ladder.
///
/// Reactances are ordered source to load. Signs carry the element type:
/// negative is a capacitor (magnitude `1/(omega C)`), positive an inductor
/// (magnitude `omega L`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LadderNetwork {
    /// Element reactances in ohms, element 0 adjacent to the source.
    pub reactances: [f64; 3],

    /// Position kind of element 0.
    pub first: FirstElement,
}

impl LadderNetwork {
    pub fn new(reactances: [f64; 3], first: FirstElement) -> Self {
        Self { reactances, first }
    }

    /// Whether the element at `index` sits in series.
    #[inline]
    pub fn is_series_at(&self, index: usize) -> bool {
        self.first.is_series_at(index)
    }

    /// The same ladder driven from the other end.
    ///
    /// Only the element order flips; the alternation rule is unchanged, so
    /// after reversal index 0 refers to what used to be the load-side
    /// element.
    pub fn reversed(&self) -> Self {
        let [a, b, c] = self.reactances;
        Self {
            reactances: [c, b, a],
            first: self.first,
        }
    }
}
