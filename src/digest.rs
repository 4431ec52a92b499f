//! Keyed digest used to validate secret recovery
//!
//! The digest of an N-byte secret is `tag ‖ R` where `R` is N−4 random
//! bytes and `tag` is the first four bytes of HMAC-SHA256 keyed by `R` over
//! the secret. It is hidden as an interpolation node next to the secret,
//! so a wrong set of shares yields a secret/digest pair that fails to
//! verify.

use hmac::{Hmac, Mac};
use rand::{CryptoRng, RngCore};
use sha2::Sha256;

use crate::error::{Error, Result};
use crate::vector::FieldVector;

type HmacSha256 = Hmac<Sha256>;

/// Length of the truncated HMAC tag
pub const DIGEST_LENGTH: usize = 4;

/// Computes the digest of `secret` with a fresh random key
///
/// # Errors
/// Returns an error if the secret is shorter than 4 bytes
pub fn digest(secret: &FieldVector) -> Result<FieldVector> {
    digest_with_rng(secret, &mut rand::thread_rng())
}

/// Computes the digest of `secret` with a key drawn from `rng`
///
/// # Errors
/// Returns an error if the secret is shorter than 4 bytes
pub fn digest_with_rng<R: RngCore + CryptoRng>(
    secret: &FieldVector,
    rng: &mut R,
) -> Result<FieldVector> {
    if secret.len() < DIGEST_LENGTH {
        return Err(Error::invalid(
            "secret",
            format!(
                "secret is too short ({} bits), must be at least {} bits",
                secret.len() * 8,
                DIGEST_LENGTH * 8
            ),
        ));
    }

    let key = FieldVector::random_with_rng(secret.len() - DIGEST_LENGTH, rng);
    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .map_err(|e| Error::invalid("key", e.to_string()))?;
    mac.update(secret.as_bytes());
    let tag = mac.finalize().into_bytes();

    Ok(FieldVector::from_bytes(&tag[..DIGEST_LENGTH]).concat(&key))
}

/// Checks that `digest` was produced from `secret`
///
/// An absent digest or a length mismatch yields `false`.
#[must_use]
pub fn verify_digest(secret: &FieldVector, digest: Option<&FieldVector>) -> bool {
    let Some(digest) = digest else {
        return false;
    };
    if digest.len() != secret.len() || digest.len() < DIGEST_LENGTH {
        return false;
    }

    let (tag, key) = digest.as_bytes().split_at(DIGEST_LENGTH);
    let Ok(mut mac) = HmacSha256::new_from_slice(key) else {
        return false;
    };
    mac.update(secret.as_bytes());
    mac.verify_truncated_left(tag).is_ok()
}
