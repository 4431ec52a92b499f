//! `IterationExponent` newtype for the passphrase cipher

use crate::error::{Error, Result};

/// Exponent `e` of the key-derivation cost (0..=31)
///
/// Each Feistel round runs PBKDF2 with `2500 << e` iterations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct IterationExponent(u8);

impl IterationExponent {
    /// Number of bits in the encoded exponent
    pub const BITS: u32 = 5;

    /// Maximum exponent
    pub const MAX: u8 = (1 << Self::BITS) - 1;

    /// PBKDF2 iterations per round at exponent 0
    pub const BASE_ITERATIONS: u64 = 2500;

    /// Creates a new exponent
    ///
    /// # Errors
    /// Returns an error if `value` exceeds 31
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slip39::domain::IterationExponent;
    ///
    /// let e = IterationExponent::new(2).unwrap();
    /// assert_eq!(e.iterations(), 10_000);
    /// assert!(IterationExponent::new(32).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value > Self::MAX {
            return Err(Error::out_of_range(
                "iteration_exponent",
                format!(
                    "iteration exponent should be at most {}, instead has {value}",
                    Self::MAX
                ),
            ));
        }
        Ok(Self(value))
    }

    /// PBKDF2 iteration count per Feistel round
    #[must_use]
    pub fn iterations(self) -> u64 {
        Self::BASE_ITERATIONS << self.0
    }
}

impl std::ops::Deref for IterationExponent {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
