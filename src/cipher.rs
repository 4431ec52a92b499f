//! Passphrase encryption of the master secret
//!
//! A four-round Feistel network whose round function is PBKDF2-HMAC-SHA256:
//!
//! ```text
//! F(i, R) = PBKDF2(password = i ‖ passphrase,
//!                  salt     = "shamir" ‖ id ‖ R,
//!                  rounds   = 2500 << e,
//!                  length   = |R|)
//! ```
//!
//! There is no integrity check at this layer: decrypting with the wrong
//! passphrase silently yields a different secret.
//!
//! The round function is deliberately slow. At high exponents a call can
//! take seconds and cannot be interrupted; run it off latency-sensitive
//! paths. Exponents above 20 need more rounds than the `pbkdf2` crate's
//! `u32` counter holds; those are derived here with a `u64` counter.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::debug;
use zeroize::Zeroizing;

use crate::checksum::CUSTOMIZATION_STRING;
use crate::domain::{Identifier, IterationExponent};
use crate::error::{Error, Result};
use crate::vector::FieldVector;

type HmacSha256 = Hmac<Sha256>;

/// Number of Feistel rounds
pub const ROUND_COUNT: u8 = 4;

/// Output size of one PBKDF2-HMAC-SHA256 block
const PRF_OUTPUT_LENGTH: usize = 32;

/// Encrypts `secret` under `passphrase`
///
/// # Errors
/// Returns an error if the secret has an odd length
///
/// # Examples
///
/// ```rust
/// use slip39::cipher::{decrypt, encrypt};
/// use slip39::domain::{Identifier, IterationExponent};
/// use slip39::FieldVector;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let secret = FieldVector::from_hex("bb54aac4b89dc868ba37d9cc21b2cece")?;
/// let id = Identifier::new(7945)?;
/// let e = IterationExponent::new(0)?;
///
/// let encrypted = encrypt(&secret, e, id, "TREZOR")?;
/// assert_ne!(encrypted, secret);
/// assert_eq!(decrypt(&encrypted, e, id, "TREZOR")?, secret);
/// # Ok(())
/// # }
/// ```
pub fn encrypt(
    secret: &FieldVector,
    iteration_exponent: IterationExponent,
    identifier: Identifier,
    passphrase: &str,
) -> Result<FieldVector> {
    feistel(
        secret,
        iteration_exponent,
        identifier,
        passphrase,
        0..ROUND_COUNT,
    )
}

/// Decrypts a secret produced by [`encrypt`]
///
/// # Errors
/// Same conditions as [`encrypt`]
pub fn decrypt(
    encrypted: &FieldVector,
    iteration_exponent: IterationExponent,
    identifier: Identifier,
    passphrase: &str,
) -> Result<FieldVector> {
    feistel(
        encrypted,
        iteration_exponent,
        identifier,
        passphrase,
        (0..ROUND_COUNT).rev(),
    )
}

fn feistel(
    input: &FieldVector,
    iteration_exponent: IterationExponent,
    identifier: Identifier,
    passphrase: &str,
    rounds: impl Iterator<Item = u8>,
) -> Result<FieldVector> {
    if input.len() % 2 != 0 {
        return Err(Error::invalid(
            "secret",
            format!("length must be even, got {} bytes", input.len()),
        ));
    }
    let iterations = iteration_exponent.iterations();
    debug!(
        iteration_exponent = *iteration_exponent,
        identifier = *identifier,
        "running feistel rounds"
    );

    let (mut left, mut right) = input.split_at(input.len() / 2)?;
    for round in rounds {
        let key = round_function(round, &right, passphrase, identifier, iterations)?;
        let next = left.try_add(&key)?;
        left = right;
        right = next;
    }

    Ok(right.concat(&left))
}

fn round_function(
    round: u8,
    right: &FieldVector,
    passphrase: &str,
    identifier: Identifier,
    iterations: u64,
) -> Result<FieldVector> {
    let mut password = Zeroizing::new(Vec::with_capacity(1 + passphrase.len()));
    password.push(round);
    password.extend_from_slice(passphrase.as_bytes());

    let mut salt = Vec::with_capacity(CUSTOMIZATION_STRING.len() + 2 + right.len());
    salt.extend_from_slice(CUSTOMIZATION_STRING.as_bytes());
    salt.extend_from_slice(&identifier.to_be_bytes());
    salt.extend_from_slice(right.as_bytes());

    let mut output = Zeroizing::new(vec![0u8; right.len()]);
    match u32::try_from(iterations) {
        Ok(rounds) => pbkdf2::pbkdf2_hmac::<Sha256>(&password, &salt, rounds, &mut output),
        Err(_) => pbkdf2_hmac_sha256_wide(&password, &salt, iterations, &mut output)?,
    }
    Ok(FieldVector::from_bytes(&output))
}

/// PBKDF2-HMAC-SHA256 with a 64-bit iteration counter
///
/// Block `i` is `U₁ ⊕ … ⊕ U_c` with `U₁ = PRF(salt ‖ i)` and
/// `Uⱼ = PRF(Uⱼ₋₁)`.
fn pbkdf2_hmac_sha256_wide(
    password: &[u8],
    salt: &[u8],
    iterations: u64,
    output: &mut [u8],
) -> Result<()> {
    let prf = HmacSha256::new_from_slice(password)
        .map_err(|e| Error::invalid("passphrase", e.to_string()))?;

    for (block_index, chunk) in (1u32..).zip(output.chunks_mut(PRF_OUTPUT_LENGTH)) {
        let mut mac = prf.clone();
        mac.update(salt);
        mac.update(&block_index.to_be_bytes());
        let mut u = mac.finalize().into_bytes();
        let mut block = u.clone();

        for _ in 1..iterations {
            let mut mac = prf.clone();
            mac.update(&u);
            u = mac.finalize().into_bytes();
            for (acc, byte) in block.iter_mut().zip(u.iter()) {
                *acc ^= byte;
            }
        }

        chunk.copy_from_slice(&block[..chunk.len()]);
    }
    Ok(())
}
