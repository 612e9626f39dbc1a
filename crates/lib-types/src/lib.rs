//! # lib-types
//!
//! Core type definitions for the zmatch impedance-matching workspace.
//!
//! This crate provides foundational types used throughout the workspace:
//! - Physical units with compile-time safety
//! - Complex impedance representation and the series/parallel transform
//! - Ladder-network primitives shared by synthesis, validation, and emission

pub mod units;
pub mod impedance;
pub mod ladder;

pub use units::*;
pub use impedance::*;
pub use ladder::*;

/// Re-export num_complex for convenience
pub use num_complex::Complex64;
