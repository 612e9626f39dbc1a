//! # lib-spice
//!
//! The SPICE-facing text surface of zmatch.
//!
//! This crate provides:
//! - An impedance-expression parser (`10+10j`, `1000-100j`, `50`, ...)
//! - Engineering number formatting with 6 significant digits
//! - Subcircuit netlist emission: reactances to frequency-scaled C/L
//!   elements with ladder node numbering
//!
//! The parser is built using the `nom` parser combinator library.

pub mod eng;
pub mod error;
pub mod netlist;
pub mod parse;

pub use error::SpiceError;
pub use netlist::{Element, Subcircuit};
pub use parse::parse_impedance;
