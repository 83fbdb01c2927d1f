//! Error types.

use core::fmt;

use crate::oid::ObjectIdentifier;

/// Result type with the crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Decoding, validation, and randomness errors.
///
/// Arithmetic invariant violations (a modular inverse of non-coprime
/// operands) are programming errors rather than inputs and panic instead of
/// surfacing here; see [`arithmetic::inv_mod`](crate::arithmetic::inv_mod).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Input bytes or text failed to decode as the expected structure.
    Parse {
        /// Structure being decoded when the failure occurred.
        context: &'static str,
        /// What was malformed.
        reason: String,
    },
    /// A decoded named-curve object identifier is not in the registry.
    UnknownCurve(ObjectIdentifier),
    /// Decoded key material violates a range or curve invariant.
    Validation(String),
    /// The secure random source failed to produce bytes.
    RandomSource,
}

impl Error {
    pub(crate) fn parse(context: &'static str, reason: impl Into<String>) -> Self {
        Error::Parse {
            context,
            reason: reason.into(),
        }
    }

    pub(crate) fn validation(reason: impl Into<String>) -> Self {
        Error::Validation(reason.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse { context, reason } => write!(f, "malformed {context}: {reason}"),
            Error::UnknownCurve(oid) => write!(f, "unknown curve with oid {oid}"),
            Error::Validation(reason) => write!(f, "invalid key material: {reason}"),
            Error::RandomSource => f.write_str("random source failure"),
        }
    }
}

impl std::error::Error for Error {}
