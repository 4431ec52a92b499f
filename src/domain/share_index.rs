//! `ShareIndex` newtype for secret sharing

use crate::error::{Error, Result};
use crate::field::FieldElement;

use super::MAX_SHARE_COUNT;

/// Share index (0..=15)
///
/// The evaluation point of a visible share. Points 254 and 255 carry the
/// digest and the secret during a split and are never handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareIndex(u8);

impl ShareIndex {
    /// Maximum valid share index
    pub const MAX: u8 = MAX_SHARE_COUNT - 1;

    /// Creates a new share index
    ///
    /// # Errors
    /// Returns an error if index is greater than 15
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slip39::domain::ShareIndex;
    ///
    /// let index = ShareIndex::new(0).unwrap();
    /// assert_eq!(*index, 0);
    ///
    /// assert!(ShareIndex::new(16).is_err());
    /// assert!(ShareIndex::new(255).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value > Self::MAX {
            return Err(Error::out_of_range(
                "share_index",
                format!("share index is {value}, must be at most {}", Self::MAX),
            ));
        }
        Ok(Self(value))
    }

    /// The share's evaluation point
    #[must_use]
    pub fn point(self) -> FieldElement {
        FieldElement::new(self.0)
    }
}

impl TryFrom<FieldElement> for ShareIndex {
    type Error = Error;

    fn try_from(point: FieldElement) -> Result<Self> {
        Self::new(point.value())
    }
}

impl std::ops::Deref for ShareIndex {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
