//! `ShareCount` newtype for secret sharing

use crate::error::{Error, Result};

use super::MAX_SHARE_COUNT;

/// Number of shares to create (1..=16)
///
/// Share points are encoded in four bits, which caps a split at 16 shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(u8);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: u8 = 1;

    /// Maximum valid share count
    pub const MAX: u8 = MAX_SHARE_COUNT;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns an error if count is 0 or greater than 16
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slip39::domain::ShareCount;
    ///
    /// let count = ShareCount::new(5).unwrap();
    /// assert_eq!(*count, 5);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// assert!(ShareCount::new(17).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value < Self::MIN {
            return Err(Error::out_of_range(
                "total_shares",
                "share count must be at least 1",
            ));
        }
        if value > Self::MAX {
            return Err(Error::out_of_range(
                "total_shares",
                format!(
                    "total_shares is {value}, should not be greater than {}",
                    Self::MAX
                ),
            ));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareCount {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
