//! Error types for the text surface.

use thiserror::Error;

/// Errors that can occur while parsing impedances or emitting netlists.
#[derive(Debug, Error)]
pub enum SpiceError {
    /// The impedance expression could not be parsed.
    #[error("invalid impedance expression: '{0}'")]
    InvalidImpedance(String),

    /// A netlist cannot be scaled without a positive design frequency.
    #[error("netlist emission requires a positive frequency, got {0} Hz")]
    NonPositiveFrequency(f64),
}

/// Convert nom errors to our error type.
impl<'a> From<nom::Err<nom::error::Error<&'a str>>> for SpiceError {
    fn from(err: nom::Err<nom::error::Error<&'a str>>) -> Self {
        match err {
            nom::Err::Incomplete(_) => SpiceError::InvalidImpedance("incomplete input".to_string()),
            nom::Err::Error(e) | nom::Err::Failure(e) => {
                let preview: String = e.input.chars().take(20).collect();
                SpiceError::InvalidImpedance(preview)
            }
        }
    }
}
