//! Named share groups

use std::fmt;

use crate::error::Result;

use super::SplitConfig;

/// A named group of shares with its own threshold
///
/// Passive holder of a validated [`SplitConfig`]. When no name is given the
/// group is labelled after its parameters, e.g. `"2 out of 3 group"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: String,
    config: SplitConfig,
}

impl Group {
    /// Creates a group with validated member count and threshold
    ///
    /// # Errors
    /// Returns an error if `members` is outside 1..=16 or `threshold` is
    /// outside 1..=`members`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slip39::domain::Group;
    ///
    /// let group = Group::new(None, 3, 2).unwrap();
    /// assert_eq!(group.name(), "2 out of 3 group");
    ///
    /// let named = Group::new(Some("family"), 5, 3).unwrap();
    /// assert_eq!(named.name(), "family");
    ///
    /// assert!(Group::new(None, 17, 2).is_err());
    /// assert!(Group::new(None, 3, 4).is_err());
    /// ```
    pub fn new(name: Option<&str>, members: u8, threshold: u8) -> Result<Self> {
        let config = SplitConfig::from_values(threshold, members)?;
        Ok(Self::with_config(name, config))
    }

    /// Wraps an already validated configuration
    #[must_use]
    pub fn with_config(name: Option<&str>, config: SplitConfig) -> Self {
        let name = name.map_or_else(
            || {
                format!(
                    "{} out of {} group",
                    *config.threshold(),
                    *config.share_count()
                )
            },
            str::to_string,
        );
        Self { name, config }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn config(&self) -> SplitConfig {
        self.config
    }

    /// Number of member shares in the group
    #[must_use]
    pub fn member_count(&self) -> u8 {
        *self.config.share_count()
    }

    /// Member shares required to reconstruct the group secret
    #[must_use]
    pub fn threshold(&self) -> u8 {
        *self.config.threshold()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} of {})",
            self.name,
            self.threshold(),
            self.member_count()
        )
    }
}
