//! Error types for the argument parser.
//!
//! Malformed user input is never an error: the parser records it into its
//! invalid-* buckets and keeps going. The only failures surfaced as `Err`
//! are contract violations inside the library itself.

use thiserror::Error;

use crate::schema::OptionKind;

/// Contract-violation errors raised by [`ArgumentParser::parse`].
///
/// [`ArgumentParser::parse`]: crate::ArgumentParser::parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A value passed the format validator for its declared kind but the
    /// numeric conversion still rejected it. The validator and converter
    /// grammars are meant to accept the same language, so this indicates a
    /// defect in the library, not in the input.
    #[error("validator/converter mismatch for {kind:?} value {value:?}")]
    ConversionMismatch { value: String, kind: OptionKind },
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;
