//! Domain types for SLIP-39 secret sharing
//!
//! This module contains validated newtypes and configuration:
//! - [`Threshold`] - Minimum shares required for reconstruction (1..=16)
//! - [`ShareIndex`] - Evaluation point of a share (0..=15)
//! - [`ShareCount`] - Total number of shares to create (1..=16)
//! - [`SplitConfig`] - Validated threshold and share count pair
//! - [`Group`] - A named split configuration
//! - [`Identifier`] - 15-bit identifier binding shares and the cipher salt
//! - [`IterationExponent`] - Key-derivation cost exponent (0..=31)

mod config;
mod group;
mod identifier;
mod iteration_exponent;
mod share_count;
mod share_index;
mod threshold;

pub use config::SplitConfig;
pub use group::Group;
pub use identifier::Identifier;
pub use iteration_exponent::IterationExponent;
pub use share_count::ShareCount;
pub use share_index::ShareIndex;
pub use threshold::Threshold;

/// Maximum number of shares in a split (and members in a group)
pub const MAX_SHARE_COUNT: u8 = 16;
