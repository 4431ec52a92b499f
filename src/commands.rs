use std::collections::HashSet;
use std::fmt;

use anyhow::{Context, Result, bail};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::cipher;
use crate::codec::{self, Share, ShareMetadata, Slip39Mnemonic};
use crate::domain::{Group, Identifier, IterationExponent, ShareIndex};
use crate::interpolate::ShareSet;
use crate::sharing::{self, MIN_SECRET_LENGTH};
use crate::vector::FieldVector;
use crate::wordlist::Wordlist;

/// Parameters of a split beyond the secret itself
#[derive(Debug, Clone)]
pub struct SplitOptions {
    pub group: Group,
    pub iteration_exponent: IterationExponent,
}

impl SplitOptions {
    #[must_use]
    pub fn new(group: Group, iteration_exponent: IterationExponent) -> Self {
        Self {
            group,
            iteration_exponent,
        }
    }
}

/// Split a hex-encoded master secret into SLIP-39 share mnemonics
///
/// The secret is encrypted under `passphrase` (which may be empty), then
/// split within a single group. Every share records a fresh random
/// identifier, the iteration exponent, its member index and the member
/// threshold.
///
/// # Errors
/// Returns an error if the hex does not parse, the secret is shorter than
/// 16 bytes or has an odd length, or encryption, splitting or encoding fail
pub fn split_secret(
    secret_hex: &str,
    options: &SplitOptions,
    passphrase: &str,
    wordlist: &Wordlist,
) -> Result<Vec<Slip39Mnemonic>> {
    split_secret_with_rng(
        secret_hex,
        options,
        passphrase,
        wordlist,
        &mut rand::thread_rng(),
    )
}

/// [`split_secret`] drawing the identifier and share randomness from `rng`
///
/// # Errors
/// Same conditions as [`split_secret`]
pub fn split_secret_with_rng<R: RngCore + CryptoRng>(
    secret_hex: &str,
    options: &SplitOptions,
    passphrase: &str,
    wordlist: &Wordlist,
    rng: &mut R,
) -> Result<Vec<Slip39Mnemonic>> {
    let secret = FieldVector::from_hex(secret_hex).context("Failed to parse master secret hex")?;
    validate_secret_length(&secret)?;

    let identifier = Identifier::random_with_rng(rng);
    let iteration_exponent = options.iteration_exponent;
    info!(
        group = options.group.name(),
        threshold = options.group.threshold(),
        shares = options.group.member_count(),
        "splitting master secret"
    );

    let encrypted = cipher::encrypt(&secret, iteration_exponent, identifier, passphrase)
        .context("Failed to encrypt master secret")?;
    let shares = sharing::split_secret_with_rng(&encrypted, options.group.config(), rng)
        .context("Failed to split secret")?;

    // Thresholds are stored minus one so that 16 fits in four bits
    let member_threshold = options.group.threshold() - 1;

    let mut share_mnemonics = Vec::with_capacity(shares.len());
    for (point, value) in &shares {
        let member_index = ShareIndex::try_from(*point)?;
        let metadata = ShareMetadata {
            identifier,
            iteration_exponent,
            group_index: 0,
            group_threshold: 0,
            group_count: 0,
            member_index: *member_index,
            member_threshold,
        };
        let mnemonic = codec::create_share(metadata, value, wordlist)
            .with_context(|| format!("Failed to encode share #{}", *member_index + 1))?;
        share_mnemonics.push(mnemonic);
    }

    debug!(count = share_mnemonics.len(), "encoded shares");
    Ok(share_mnemonics)
}

/// Combine SLIP-39 share mnemonics and decrypt the master secret
///
/// Returns the master secret as lowercase hex.
///
/// # Errors
/// Returns an error if a share does not parse, the shares disagree on
/// their identifier, iteration exponent or thresholds, an index repeats,
/// there are fewer shares than the threshold, or recovery fails its digest
pub fn combine_shares(
    share_strings: &[String],
    passphrase: &str,
    wordlist: &Wordlist,
) -> Result<Zeroizing<String>> {
    if share_strings.is_empty() {
        bail!("No shares provided");
    }

    let mut parsed_shares = Vec::with_capacity(share_strings.len());
    for (idx, share_str) in share_strings.iter().enumerate() {
        let share = codec::parse_share(share_str, wordlist)
            .with_context(|| format!("Failed to parse share #{}", idx + 1))?;
        parsed_shares.push(share);
    }

    let reference = *parsed_shares[0].metadata();
    if reference.group_threshold != 0 || reference.group_count != 0 {
        bail!(
            "Multi-group shares are not supported: group threshold {}, group count {}",
            reference.group_threshold + 1,
            reference.group_count + 1
        );
    }

    let mut seen_indices = HashSet::new();
    for (idx, share) in parsed_shares.iter().enumerate() {
        let metadata = share.metadata();
        check_consistent(idx, "identifier", *reference.identifier, *metadata.identifier)?;
        check_consistent(
            idx,
            "iteration exponent",
            *reference.iteration_exponent,
            *metadata.iteration_exponent,
        )?;
        check_consistent(idx, "group index", reference.group_index, metadata.group_index)?;
        check_consistent(
            idx,
            "threshold",
            reference.member_threshold + 1,
            metadata.member_threshold + 1,
        )?;
        if !seen_indices.insert(metadata.member_index) {
            bail!(
                "Share #{} duplicates member index {}",
                idx + 1,
                metadata.member_index
            );
        }
    }

    let threshold = reference.member_threshold + 1;
    if parsed_shares.len() < usize::from(threshold) {
        bail!(
            "Insufficient shares: need at least {}, but only {} provided",
            threshold,
            parsed_shares.len()
        );
    }
    debug!(
        threshold,
        shares = parsed_shares.len(),
        identifier = *reference.identifier,
        "combining shares"
    );

    let mut share_set = ShareSet::new();
    for share in &parsed_shares {
        let index = ShareIndex::new(share.metadata().member_index)?;
        share_set.insert(index.point(), share.value().clone());
    }

    let encrypted =
        sharing::recover_secret(threshold, &share_set).context("Failed to recover secret")?;
    let secret = cipher::decrypt(
        &encrypted,
        reference.iteration_exponent,
        reference.identifier,
        passphrase,
    )
    .context("Failed to decrypt master secret")?;

    Ok(secret.to_hex())
}

/// Decoded share metadata, with thresholds and counts in natural units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareInfo {
    pub identifier: u16,
    pub iteration_exponent: u8,
    pub group_index: u8,
    pub group_threshold: u8,
    pub group_count: u8,
    pub member_index: u8,
    pub member_threshold: u8,
    /// Share value length in bytes
    pub value_length: usize,
}

impl From<&Share> for ShareInfo {
    fn from(share: &Share) -> Self {
        let metadata = share.metadata();
        Self {
            identifier: *metadata.identifier,
            iteration_exponent: *metadata.iteration_exponent,
            group_index: metadata.group_index,
            group_threshold: metadata.group_threshold + 1,
            group_count: metadata.group_count + 1,
            member_index: metadata.member_index,
            member_threshold: metadata.member_threshold + 1,
            value_length: share.value().len(),
        }
    }
}

impl fmt::Display for ShareInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "identifier:         {}", self.identifier)?;
        writeln!(f, "iteration exponent: {}", self.iteration_exponent)?;
        writeln!(
            f,
            "group:              {} ({} of {} groups required)",
            self.group_index, self.group_threshold, self.group_count
        )?;
        writeln!(
            f,
            "member:             {} ({} shares required)",
            self.member_index, self.member_threshold
        )?;
        write!(f, "secret length:      {} bits", self.value_length * 8)
    }
}

/// Decode a share mnemonic and report its metadata without touching the value
///
/// # Errors
/// Returns an error if the mnemonic does not parse
pub fn inspect_share(share_str: &str, wordlist: &Wordlist) -> Result<ShareInfo> {
    let share = codec::parse_share(share_str, wordlist).context("Failed to parse share")?;
    Ok(ShareInfo::from(&share))
}

/// Generate a random master secret of `length` bytes, hex encoded
///
/// # Errors
/// Returns an error if `length` is below 16 or odd
pub fn generate_secret(length: usize) -> Result<Zeroizing<String>> {
    let secret = FieldVector::random(length);
    validate_secret_length(&secret)?;
    Ok(secret.to_hex())
}

fn validate_secret_length(secret: &FieldVector) -> Result<()> {
    if secret.len() < MIN_SECRET_LENGTH {
        bail!(
            "Master secret must be at least {} bits, got {} bits",
            MIN_SECRET_LENGTH * 8,
            secret.len() * 8
        );
    }
    if secret.len() % 2 != 0 {
        bail!(
            "Master secret must have an even number of bytes, got {}",
            secret.len()
        );
    }
    Ok(())
}

fn check_consistent<T: PartialEq + fmt::Display>(
    idx: usize,
    field: &str,
    expected: T,
    actual: T,
) -> Result<()> {
    if expected != actual {
        bail!(
            "Share #{} has inconsistent {field}: expected {expected}, got {actual}",
            idx + 1
        );
    }
    Ok(())
}
