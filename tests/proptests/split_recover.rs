//! Property tests for split/recover and the full workflows

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use slip39::cipher::{decrypt, encrypt};
use slip39::commands::{SplitOptions, combine_shares, split_secret};
use slip39::domain::{Group, Identifier, IterationExponent, SplitConfig};
use slip39::{Error, FieldVector, ShareSet, Wordlist, recover_secret};

/// Master secret: at least 16 bytes, even length
#[derive(Clone, Debug)]
struct Secret(Vec<u8>);

impl Arbitrary for Secret {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = 16 + 2 * (usize::arbitrary(g) % 9); // 16..=32
        Secret((0..len).map(|_| u8::arbitrary(g)).collect())
    }
}

/// Valid threshold and share count pair
#[derive(Clone, Copy, Debug)]
struct ValidParams {
    threshold: u8,
    num_shares: u8,
}

impl Arbitrary for ValidParams {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_shares = (u8::arbitrary(g) % 16) + 1; // 1..=16
        let threshold = (u8::arbitrary(g) % num_shares) + 1; // 1..=num_shares

        ValidParams {
            threshold,
            num_shares,
        }
    }
}

/// Picks `count` distinct entries of `shares` driven by `seed`
fn select(shares: &ShareSet, count: usize, seed: u64) -> ShareSet {
    let mut entries: Vec<_> = shares.iter().collect();
    let mut seed = seed;
    for i in 0..entries.len() {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let range = (entries.len() - i) as u64;
        let j = i + usize::try_from((seed >> 33) % range).unwrap();
        entries.swap(i, j);
    }
    entries
        .into_iter()
        .take(count)
        .map(|(k, v)| (*k, v.clone()))
        .collect()
}

/// Any threshold-sized subset recovers the secret
#[quickcheck]
fn prop_split_recover_round_trip(secret: Secret, params: ValidParams, seed: u64) -> bool {
    let secret = FieldVector::from_bytes(&secret.0);
    let config = SplitConfig::from_values(params.threshold, params.num_shares).unwrap();

    let Ok(shares) = slip39::split_secret(&secret, config) else {
        return false;
    };
    if shares.len() != usize::from(params.num_shares) {
        return false;
    }

    let subset = select(&shares, usize::from(params.threshold), seed);
    recover_secret(params.threshold, &subset).is_ok_and(|recovered| recovered == secret)
}

/// Recovering with a threshold one below the real one fails the digest
#[quickcheck]
fn prop_insufficient_shares_fail(secret: Secret, params: ValidParams, seed: u64) -> bool {
    if params.threshold < 3 {
        return true;
    }
    let secret = FieldVector::from_bytes(&secret.0);
    let config = SplitConfig::from_values(params.threshold, params.num_shares).unwrap();
    let shares = slip39::split_secret(&secret, config).unwrap();

    let short = params.threshold - 1;
    let subset = select(&shares, usize::from(short), seed);
    matches!(recover_secret(short, &subset), Err(Error::DigestMismatch))
}

/// The cipher is a permutation keyed by passphrase, identifier and exponent
#[quickcheck]
fn prop_cipher_round_trip(secret: Secret, passphrase: String, id: u16) -> bool {
    let secret = FieldVector::from_bytes(&secret.0);
    let identifier = Identifier::new(id & Identifier::MAX).unwrap();
    let exponent = IterationExponent::new(0).unwrap();

    let Ok(encrypted) = encrypt(&secret, exponent, identifier, &passphrase) else {
        return false;
    };
    encrypted.len() == secret.len()
        && decrypt(&encrypted, exponent, identifier, &passphrase)
            .is_ok_and(|decrypted| decrypted == secret)
}

/// Full workflow: hex secret to mnemonics and back
#[quickcheck]
fn prop_workflow_round_trip(secret: Secret, params: ValidParams, seed: u64) -> bool {
    let wordlist = Wordlist::new((0..1024).map(|i| format!("w{i:04}"))).unwrap();
    let secret_hex = hex::encode(&secret.0);
    let options = SplitOptions::new(
        Group::new(None, params.num_shares, params.threshold).unwrap(),
        IterationExponent::new(0).unwrap(),
    );

    let Ok(mnemonics) = split_secret(&secret_hex, &options, "", &wordlist) else {
        return false;
    };

    let mut selected: Vec<String> = mnemonics.iter().map(ToString::to_string).collect();
    let mut seed = seed;
    for i in 0..selected.len() {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let range = (selected.len() - i) as u64;
        let j = i + usize::try_from((seed >> 33) % range).unwrap();
        selected.swap(i, j);
    }
    selected.truncate(usize::from(params.threshold));

    combine_shares(&selected, "", &wordlist).is_ok_and(|recovered| *recovered == secret_hex)
}
