//! Error types for secret sharing, encryption and share encoding

/// Result alias used throughout the library core
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the library core.
///
/// Argument errors (`MissingArgument`, `InvalidArgument`, `OutOfRange`,
/// `DivisionByZero`) indicate a caller bug. Data errors (`DigestMismatch`,
/// `ChecksumMismatch`, `UnknownWord`, `Hex`) indicate bad input material,
/// see [`Error::is_data_error`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required input was empty or absent.
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    /// An argument violated a structural precondition.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// A numeric argument was outside its allowed range.
    #[error("argument `{name}` out of range: {reason}")]
    OutOfRange { name: &'static str, reason: String },

    /// Attempted to invert the additive identity of GF(256).
    #[error("division by zero in GF(256)")]
    DivisionByZero,

    /// The interpolated secret does not match the interpolated digest.
    #[error("secret digest does not match: shares are insufficient or inconsistent")]
    DigestMismatch,

    /// The mnemonic checksum words do not validate.
    #[error("mnemonic checksum verification failed")]
    ChecksumMismatch,

    /// A mnemonic word is not present in the dictionary.
    #[error("word '{0}' not found in wordlist")]
    UnknownWord(String),

    /// Hex decoding error.
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_range(name: &'static str, reason: impl Into<String>) -> Self {
        Self::OutOfRange {
            name,
            reason: reason.into(),
        }
    }

    /// Returns true when the error stems from the input material rather than
    /// from the way the API was called.
    #[must_use]
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::DigestMismatch | Self::ChecksumMismatch | Self::UnknownWord(_) | Self::Hex(_)
        )
    }
}
