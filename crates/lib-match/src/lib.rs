//! # lib-match
//!
//! Closed-form synthesis of three-element impedance-matching ladders.
//!
//! This crate is the mathematical core of zmatch:
//!
//! - **Topology synthesis**: LCC, PI, and TEE formulas mapping a complex
//!   source impedance, a resistive load, and a target Q to a reactance triple
//! - **Ladder validation**: algebraic recomputation of the input impedance
//!   and the conjugate-match check that gates all output
//!
//! All operations are deterministic closed-form arithmetic over a handful of
//! scalars; there is no state, no I/O, and nothing to retry.

pub mod error;
pub mod ladder;
pub mod topology;

pub use error::{SynthesisError, SynthesisResult};
pub use ladder::{input_impedance, validate, MATCH_TOLERANCE};
pub use topology::Topology;
