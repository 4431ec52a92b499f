//! `Identifier` newtype shared by all shares of one secret

use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};

/// 15-bit identifier (0..=32767)
///
/// Always interpreted as a big-endian value, both when supplied as bytes
/// and when fed into the cipher salt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(u16);

impl Identifier {
    /// Number of bits in an identifier
    pub const BITS: u32 = 15;

    /// Maximum identifier value
    pub const MAX: u16 = (1 << Self::BITS) - 1;

    /// Creates an identifier from its numeric value
    ///
    /// # Errors
    /// Returns an error if `value` does not fit in 15 bits
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slip39::domain::Identifier;
    ///
    /// let id = Identifier::new(31407).unwrap();
    /// assert_eq!(id.to_be_bytes(), [0x7a, 0xaf]);
    /// assert!(Identifier::new(32768).is_err());
    /// ```
    pub fn new(value: u16) -> Result<Self> {
        if value > Self::MAX {
            return Err(Error::out_of_range(
                "identifier",
                format!("identifier has value {value}, should be at most {}", Self::MAX),
            ));
        }
        Ok(Self(value))
    }

    /// Creates an identifier from at most two big-endian bytes
    ///
    /// # Errors
    /// Returns an error for more than two bytes or a value above 15 bits
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slip39::domain::Identifier;
    ///
    /// assert_eq!(*Identifier::from_be_bytes(&[0x7a, 0xaf]).unwrap(), 31407);
    /// assert_eq!(*Identifier::from_be_bytes(&[0x05]).unwrap(), 5);
    /// assert!(Identifier::from_be_bytes(&[0x80, 0x00]).is_err());
    /// assert!(Identifier::from_be_bytes(&[0, 0, 1]).is_err());
    /// ```
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > 2 {
            return Err(Error::invalid(
                "identifier",
                format!("identifier has {} bytes, should have at most 2", bytes.len()),
            ));
        }
        let value = bytes
            .iter()
            .fold(0u16, |acc, &byte| (acc << 8) | u16::from(byte));
        Self::new(value)
    }

    /// Draws a random identifier from the thread-local CSPRNG
    #[must_use]
    pub fn random() -> Self {
        Self::random_with_rng(&mut rand::thread_rng())
    }

    /// Draws a random identifier from `rng`
    pub fn random_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 2];
        rng.fill_bytes(&mut bytes);
        Self(u16::from_be_bytes(bytes) & Self::MAX)
    }

    /// Canonical two-byte big-endian encoding
    #[must_use]
    pub fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl std::ops::Deref for Identifier {
    type Target = u16;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
