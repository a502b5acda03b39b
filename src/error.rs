//! Error types for rational construction, arithmetic and parsing.

use thiserror::Error;

/// The errors a [`Rational`](crate::Rational) operation can report.
///
/// All variants propagate synchronously to the immediate caller; nothing is
/// retried internally or coerced into a default value.
#[derive(Debug, Error)]
pub enum RationalError {
    /// Construction, inversion, or a negative power would produce a zero
    /// denominator.
    #[error("zero denominator")]
    ZeroDenominator,

    /// A checked division was given a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A square root was taken of a negative value.
    #[error("complex result")]
    ComplexResult,

    /// A text field did not parse as `<numer>[/<denom>]`.
    #[error("malformed rational field `{0}`")]
    Parse(String),

    /// The underlying stream failed while reading a field.
    #[error("read failed")]
    Io(#[from] std::io::Error),
}
