//! Property tests for share mnemonic encoding/decoding

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use slip39::codec::{Share, ShareMetadata, create_share, parse_share};
use slip39::domain::{Identifier, IterationExponent};
use slip39::{Error, FieldVector, Wordlist};

fn wordlist() -> Wordlist {
    Wordlist::new((0..1024).map(|i| format!("w{i:04}"))).unwrap()
}

/// Share value: at least 16 bytes, even length
#[derive(Clone, Debug)]
struct ShareValue(Vec<u8>);

impl Arbitrary for ShareValue {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = 16 + 2 * (usize::arbitrary(g) % 25); // 16..=64
        ShareValue((0..len).map(|_| u8::arbitrary(g)).collect())
    }
}

#[derive(Clone, Copy, Debug)]
struct ArbitraryMetadata(ShareMetadata);

impl Arbitrary for ArbitraryMetadata {
    fn arbitrary(g: &mut Gen) -> Self {
        let nibble = |g: &mut Gen| u8::arbitrary(g) % 16;
        ArbitraryMetadata(ShareMetadata {
            identifier: Identifier::new(u16::arbitrary(g) & Identifier::MAX).unwrap(),
            iteration_exponent: IterationExponent::new(u8::arbitrary(g) % 32).unwrap(),
            group_index: nibble(g),
            group_threshold: nibble(g),
            group_count: nibble(g),
            member_index: nibble(g),
            member_threshold: nibble(g),
        })
    }
}

/// Encoding then decoding reproduces metadata and value exactly
#[quickcheck]
fn prop_share_round_trip(metadata: ArbitraryMetadata, value: ShareValue) -> bool {
    let wordlist = wordlist();
    let ArbitraryMetadata(metadata) = metadata;
    let value = FieldVector::from_bytes(&value.0);

    let Ok(mnemonic) = create_share(metadata, &value, &wordlist) else {
        return false;
    };
    let Ok(share) = parse_share(mnemonic.as_str(), &wordlist) else {
        return false;
    };

    *share.metadata() == metadata && *share.value() == value
}

/// Word count is 4 metadata words, the padded value and 3 checksum words
#[quickcheck]
fn prop_word_count(metadata: ArbitraryMetadata, value: ShareValue) -> bool {
    let ArbitraryMetadata(metadata) = metadata;
    let bits = value.0.len() * 8;
    let Ok(share) = Share::new(metadata, FieldVector::from_bytes(&value.0)) else {
        return false;
    };

    share.to_indices().len() == 4 + bits.div_ceil(10) + 3
}

/// Changing any single word is caught by the checksum
#[quickcheck]
fn prop_single_word_change_detected(
    metadata: ArbitraryMetadata,
    value: ShareValue,
    position: usize,
    delta: u16,
) -> bool {
    let ArbitraryMetadata(metadata) = metadata;
    let Ok(share) = Share::new(metadata, FieldVector::from_bytes(&value.0)) else {
        return false;
    };

    let mut indices = share.to_indices();
    let position = position % indices.len();
    let delta = 1 + delta % 1023;
    indices[position] = (indices[position] + delta) % 1024;

    matches!(Share::from_indices(&indices), Err(Error::ChecksumMismatch))
}

/// Too-short values are refused at encode time
#[quickcheck]
fn prop_short_values_rejected(metadata: ArbitraryMetadata, len: u8) -> bool {
    let ArbitraryMetadata(metadata) = metadata;
    let len = usize::from(len % 16);
    Share::new(metadata, FieldVector::zeros(len)).is_err()
}
