//! Error types shared across the crate.

use core::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by algebraic operations and the encoding pipeline.
///
/// Two families exist:
/// - domain faults, where an operation's mathematical precondition is
///   violated (`DivisionByZero`, `NotOnCurve`, `PointAtInfinity`,
///   `BadCharacter`, ...); these are fatal to the current operation and
///   never coerced to a default value;
/// - configuration faults, detected when a structure is built from
///   inconsistent parameters (`BadModulus`, `NotInvertible`).
///
/// "No square root exists" and "no point at this x-coordinate" are *not*
/// errors; they are expected absences and surface as `Option::None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Multiplicative inverse of the additive zero was requested.
    DivisionByZero,
    /// A gcd-based inverse produced a non-unit gcd: the element is not
    /// invertible in this structure (the modulus is likely reducible).
    NotInvertible,
    /// The coordinates do not satisfy the curve equation.
    NotOnCurve,
    /// An affine conversion or coordinate read hit the projective identity.
    PointAtInfinity,
    /// A field or curve was constructed from a degenerate modulus.
    BadModulus(&'static str),
    /// A character outside the 64-symbol alphabet was encountered.
    BadCharacter(char),
    /// A digit outside `[0, 64)` was asked to be rendered.
    BadDigit(u8),
    /// A packed integer does not fit the configured chunk width.
    ChunkOverflow { value_bytes: usize, chunk_length: usize },
    /// Decoded bytes do not form valid UTF-8 text.
    InvalidUtf8,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DivisionByZero => write!(f, "division by the additive zero"),
            Error::NotInvertible => {
                write!(f, "element is not invertible (gcd with the modulus is not a unit)")
            }
            Error::NotOnCurve => write!(f, "point does not lie on the curve"),
            Error::PointAtInfinity => write!(f, "point at infinity has no affine coordinates"),
            Error::BadModulus(why) => write!(f, "bad modulus: {}", why),
            Error::BadCharacter(c) => write!(f, "character {:?} is outside the alphabet", c),
            Error::BadDigit(d) => write!(f, "digit {} is outside [0, 64)", d),
            Error::ChunkOverflow {
                value_bytes,
                chunk_length,
            } => write!(
                f,
                "value needs {} bytes but the chunk length is {}",
                value_bytes, chunk_length
            ),
            Error::InvalidUtf8 => write!(f, "decoded bytes are not valid UTF-8"),
        }
    }
}

impl std::error::Error for Error {}
