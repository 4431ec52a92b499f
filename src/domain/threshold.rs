//! `Threshold` newtype for secret sharing

use crate::error::{Error, Result};

use super::MAX_SHARE_COUNT;

/// Threshold for secret sharing (1..=16)
///
/// A threshold of 1 is allowed: every share then carries the secret itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u8);

impl Threshold {
    /// Minimum valid threshold
    pub const MIN: u8 = 1;

    /// Maximum valid threshold
    pub const MAX: u8 = MAX_SHARE_COUNT;

    /// Creates a new threshold
    ///
    /// # Errors
    /// Returns an error if the threshold is 0 or greater than 16
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slip39::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// assert!(Threshold::new(0).is_err());
    /// assert!(Threshold::new(17).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(Error::out_of_range(
                "threshold",
                format!(
                    "threshold is {value}, must be between {} and {}",
                    Self::MIN,
                    Self::MAX
                ),
            ));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Threshold {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
