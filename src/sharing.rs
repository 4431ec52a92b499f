//! Splitting and recovering secrets
//!
//! A secret of N bytes is split with a polynomial of degree `threshold − 1`
//! fixed by `threshold − 2` random points, the digest at point 254 and the
//! secret at point 255. Shares are the evaluations at points
//! `0..total_shares`; the two hidden points are never handed out.

use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::digest::{digest_with_rng, verify_digest};
use crate::domain::SplitConfig;
use crate::error::{Error, Result};
use crate::field::FieldElement;
use crate::interpolate::{ShareSet, interpolate};
use crate::vector::FieldVector;

/// Point carrying the digest of the secret
pub const DIGEST_INDEX: FieldElement = FieldElement::new(254);

/// Point carrying the secret
pub const SECRET_INDEX: FieldElement = FieldElement::new(255);

/// Minimum secret length in bytes (128 bits)
pub const MIN_SECRET_LENGTH: usize = 16;

/// Splits `secret` into `config.share_count()` shares
///
/// # Errors
/// Returns an error if the secret is shorter than 16 bytes
///
/// # Examples
///
/// ```rust
/// use slip39::domain::SplitConfig;
/// use slip39::{FieldVector, split_secret, recover_secret};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let secret = FieldVector::from_hex("a33456789a123456789a123456789a123456789a")?;
/// let shares = split_secret(&secret, SplitConfig::from_values(3, 5)?)?;
/// assert_eq!(shares.len(), 5);
///
/// let subset = shares.into_iter().skip(2).collect();
/// assert_eq!(recover_secret(3, &subset)?, secret);
/// # Ok(())
/// # }
/// ```
pub fn split_secret(secret: &FieldVector, config: SplitConfig) -> Result<ShareSet> {
    split_secret_with_rng(secret, config, &mut rand::thread_rng())
}

/// Splits `secret` drawing random nodes and the digest key from `rng`
///
/// # Errors
/// Returns an error if the secret is shorter than 16 bytes
pub fn split_secret_with_rng<R: RngCore + CryptoRng>(
    secret: &FieldVector,
    config: SplitConfig,
    rng: &mut R,
) -> Result<ShareSet> {
    if secret.len() < MIN_SECRET_LENGTH {
        return Err(Error::invalid(
            "secret",
            format!(
                "secret has {} bits, must have at least {} bits",
                secret.len() * 8,
                MIN_SECRET_LENGTH * 8
            ),
        ));
    }

    let threshold = *config.threshold();
    let total_shares = *config.share_count();
    debug!(threshold, total_shares, length = secret.len(), "splitting secret");

    if threshold == 1 {
        return Ok((0..total_shares)
            .map(|i| (FieldElement::new(i), secret.clone()))
            .collect());
    }

    let random_count = threshold - 2;
    let mut nodes: ShareSet = (0..random_count)
        .map(|i| {
            (
                FieldElement::new(i),
                FieldVector::random_with_rng(secret.len(), rng),
            )
        })
        .collect();
    nodes.insert(DIGEST_INDEX, digest_with_rng(secret, rng)?);
    nodes.insert(SECRET_INDEX, secret.clone());

    let mut shares = ShareSet::new();
    for i in random_count..total_shares {
        let point = FieldElement::new(i);
        shares.insert(point, interpolate(point, &nodes)?);
    }

    nodes.remove(&DIGEST_INDEX);
    nodes.remove(&SECRET_INDEX);
    shares.append(&mut nodes);

    Ok(shares)
}

/// Recovers the secret from at least `threshold` shares
///
/// # Errors
/// Returns an error if `threshold` is 0, fewer than `threshold` shares are
/// given, or [`Error::DigestMismatch`] when the recovered secret fails its
/// digest (too few or inconsistent shares)
pub fn recover_secret(threshold: u8, shares: &ShareSet) -> Result<FieldVector> {
    if threshold < 1 {
        return Err(Error::out_of_range(
            "threshold",
            "threshold must be at least equal to 1",
        ));
    }
    if shares.len() < usize::from(threshold) {
        return Err(Error::invalid(
            "shares",
            format!(
                "not enough secret shares ({}), need at least {threshold}",
                shares.len()
            ),
        ));
    }
    debug!(threshold, shares = shares.len(), "recovering secret");

    if threshold == 1 {
        return shares
            .values()
            .next()
            .cloned()
            .ok_or(Error::MissingArgument("shares"));
    }

    let secret = interpolate(SECRET_INDEX, shares)?;
    let digest = interpolate(DIGEST_INDEX, shares)?;
    if !verify_digest(&secret, Some(&digest)) {
        return Err(Error::DigestMismatch);
    }

    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET_HEX: &str = "a33456789a123456789a123456789a123456789a";

    fn secret() -> FieldVector {
        FieldVector::from_hex(SECRET_HEX).unwrap()
    }

    fn config(threshold: u8, total: u8) -> SplitConfig {
        SplitConfig::from_values(threshold, total).unwrap()
    }

    fn take(shares: &ShareSet, count: usize) -> ShareSet {
        shares
            .iter()
            .take(count)
            .map(|(k, v)| (*k, v.clone()))
            .collect()
    }

    #[test]
    fn test_split_and_recover() {
        let shares = split_secret(&secret(), config(3, 5)).unwrap();
        assert_eq!(shares.len(), 5);

        let keys: Vec<u8> = shares.keys().map(|k| k.value()).collect();
        assert_eq!(keys, vec![0, 1, 2, 3, 4]);

        let recovered = recover_secret(3, &take(&shares, 3)).unwrap();
        assert_eq!(recovered, secret());
    }

    #[test]
    fn test_every_subset_of_threshold_recovers() {
        let shares = split_secret(&secret(), config(3, 5)).unwrap();
        let entries: Vec<_> = shares.iter().collect();

        for a in 0..5 {
            for b in (a + 1)..5 {
                for c in (b + 1)..5 {
                    let subset: ShareSet = [entries[a], entries[b], entries[c]]
                        .into_iter()
                        .map(|(k, v)| (*k, v.clone()))
                        .collect();
                    assert_eq!(recover_secret(3, &subset).unwrap(), secret());
                }
            }
        }
    }

    #[test]
    fn test_threshold_two() {
        let shares = split_secret(&secret(), config(2, 4)).unwrap();
        assert_eq!(shares.len(), 4);
        let subset: ShareSet = shares
            .iter()
            .skip(2)
            .map(|(k, v)| (*k, v.clone()))
            .collect();
        assert_eq!(recover_secret(2, &subset).unwrap(), secret());
    }

    #[test]
    fn test_threshold_equal_to_total() {
        let shares = split_secret(&secret(), config(16, 16)).unwrap();
        assert_eq!(shares.len(), 16);
        assert_eq!(recover_secret(16, &shares).unwrap(), secret());
    }

    #[test]
    fn test_no_share_holds_the_secret() {
        let shares = split_secret(&secret(), config(3, 5)).unwrap();
        assert!(shares.values().all(|value| *value != secret()));
        assert!(!shares.contains_key(&SECRET_INDEX));
        assert!(!shares.contains_key(&DIGEST_INDEX));
    }

    #[test]
    fn test_threshold_one_copies_secret() {
        let shares = split_secret(&secret(), config(1, 5)).unwrap();
        assert_eq!(shares.len(), 5);
        assert!(shares.values().all(|value| *value == secret()));
        assert_eq!(recover_secret(1, &take(&shares, 1)).unwrap(), secret());
    }

    #[test]
    fn test_fewer_shares_than_threshold() {
        let shares = split_secret(&secret(), config(3, 5)).unwrap();
        let result = recover_secret(3, &take(&shares, 2));
        assert!(matches!(
            result,
            Err(Error::InvalidArgument { name: "shares", .. })
        ));
    }

    #[test]
    fn test_wrong_threshold_fails_digest() {
        let shares = split_secret(&secret(), config(3, 5)).unwrap();
        let result = recover_secret(2, &take(&shares, 2));
        assert!(matches!(result, Err(Error::DigestMismatch)));
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let shares = split_secret(&secret(), config(3, 5)).unwrap();
        assert!(matches!(
            recover_secret(0, &shares),
            Err(Error::OutOfRange { name: "threshold", .. })
        ));
    }

    #[test]
    fn test_short_secret_rejected() {
        let short = FieldVector::from_hex("a33456789a123456789a123456789a").unwrap();
        assert!(matches!(
            split_secret(&short, config(2, 3)),
            Err(Error::InvalidArgument { name: "secret", .. })
        ));
    }

    #[test]
    fn test_bounds_name_the_parameter() {
        let err = SplitConfig::from_values(3, 17).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { name: "total_shares", .. }));

        let err = SplitConfig::from_values(6, 5).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { name: "threshold", .. }));

        let err = SplitConfig::from_values(0, 5).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { name: "threshold", .. }));
    }
}
