//! RS1024 checksum over 10-bit mnemonic words
//!
//! A Reed-Solomon code over GF(1024) evaluated with a 30-bit accumulator.
//! Three checksum words are appended to the data words; the salt's
//! characters are fed into the accumulator first so that checksums are
//! bound to this scheme.

/// Salt mixed into every mnemonic checksum
pub const CUSTOMIZATION_STRING: &str = "shamir";

/// Number of checksum words appended to a mnemonic
pub const CHECKSUM_WORDS: usize = 3;

/// Bits per mnemonic word
pub const RADIX_BITS: u32 = 10;

const GENERATOR: [u32; 10] = [
    0x00E0_E040,
    0x01C1_C080,
    0x0383_8100,
    0x0707_0200,
    0x0E0E_0009,
    0x1C0C_2412,
    0x3808_6C24,
    0x3090_FC48,
    0x21B1_F890,
    0x03F3_F120,
];

fn polymod(values: impl IntoIterator<Item = u32>) -> u32 {
    let mut chk = 1u32;
    for value in values {
        let top = chk >> 20;
        chk = ((chk & 0x000F_FFFF) << 10) ^ value;
        for (i, generator) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 != 0 {
                chk ^= generator;
            }
        }
    }
    chk
}

fn salted<'a>(salt: &'a str, data: &'a [u16]) -> impl Iterator<Item = u32> + 'a {
    salt.chars()
        .map(u32::from)
        .chain(data.iter().copied().map(u32::from))
}

/// Computes the three checksum words for `data`
///
/// # Examples
///
/// ```rust
/// use slip39::checksum::{create_checksum, verify_checksum};
///
/// let mut words = vec![1, 2, 3, 1000];
/// let checksum = create_checksum("shamir", &words);
/// words.extend(checksum);
/// assert!(verify_checksum("shamir", &words));
/// ```
#[must_use]
pub fn create_checksum(salt: &str, data: &[u16]) -> [u16; CHECKSUM_WORDS] {
    let residue = polymod(salted(salt, data).chain([0; CHECKSUM_WORDS])) ^ 1;

    let mut checksum = [0u16; CHECKSUM_WORDS];
    for (i, word) in checksum.iter_mut().enumerate() {
        let shift = RADIX_BITS * (CHECKSUM_WORDS - 1 - i) as u32;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "masked to 10 bits, always fits in u16"
        )]
        let value = ((residue >> shift) & 1023) as u16;
        *word = value;
    }
    checksum
}

/// Returns true iff `data` (including its trailing checksum words) validates
#[must_use]
pub fn verify_checksum(salt: &str, data: &[u16]) -> bool {
    polymod(salted(salt, data)) == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_round_trip() {
        let mut data: Vec<u16> = (0..17).map(|i| (i * 61) % 1024).collect();
        let checksum = create_checksum(CUSTOMIZATION_STRING, &data);
        data.extend(checksum);
        assert!(verify_checksum(CUSTOMIZATION_STRING, &data));
    }

    #[test]
    fn test_known_answer() {
        let share: [u16; 20] = [
            248, 288, 0, 0, 3, 615, 879, 767, 970, 685, 788, 487, 393, 788, 1019, 261, 675, 859,
            922, 240,
        ];
        assert_eq!(create_checksum(CUSTOMIZATION_STRING, &share[..17]), [859, 922, 240]);
        assert!(verify_checksum(CUSTOMIZATION_STRING, &share));
    }

    #[test]
    fn test_checksum_words_are_ten_bits() {
        let data = [1023u16; 20];
        for word in create_checksum(CUSTOMIZATION_STRING, &data) {
            assert!(word < 1024);
        }
    }

    #[test]
    fn test_salt_binds_checksum() {
        let mut data = vec![5u16, 6, 7, 8];
        data.extend(create_checksum(CUSTOMIZATION_STRING, &data));
        assert!(!verify_checksum("other", &data));
    }

    #[test]
    fn test_single_substitution_detected() {
        let mut data: Vec<u16> = (0..20).map(|i| (i * 37 + 11) % 1024).collect();
        data.extend(create_checksum(CUSTOMIZATION_STRING, &data));

        for position in 0..data.len() {
            let mut corrupted = data.clone();
            corrupted[position] ^= 1;
            assert!(
                !verify_checksum(CUSTOMIZATION_STRING, &corrupted),
                "corruption at {position} not detected"
            );
        }
    }

    #[test]
    fn test_swapped_words_detected() {
        let mut data: Vec<u16> = vec![10, 20, 30, 40, 50];
        data.extend(create_checksum(CUSTOMIZATION_STRING, &data));
        data.swap(0, 1);
        assert!(!verify_checksum(CUSTOMIZATION_STRING, &data));
    }
}
