//! Error types for network synthesis.

use thiserror::Error;

/// Errors that can occur while synthesizing or validating a matching network.
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// LCC requires the source resistance strictly below the load.
    #[error("LCC requires a source resistance below the load: {rg} >= {rl} ohm")]
    SourceResistanceTooHigh { rg: f64, rl: f64 },

    /// The requested Q is physically unreachable for this impedance ratio.
    #[error("Q = {q} is unreachable for this source/load pair (radicand {radicand})")]
    UnreachableQ { q: f64, radicand: f64 },

    /// The synthesized ladder does not conjugate-match the source.
    #[error("conjugate match failed: error {error:e} exceeds tolerance {tolerance:e}")]
    ConjugateMismatch { error: f64, tolerance: f64 },
}

/// Result type for synthesis operations.
pub type SynthesisResult<T> = Result<T, SynthesisError>;
