//! Mnemonic encoding of shares
//!
//! A share is packed into a bit string, cut into 10-bit words, extended
//! with three RS1024 checksum words and mapped through the [`Wordlist`].
//!
//! # Layout
//!
//! ```text
//! id (15) ‖ iteration exponent (5) ‖ group index (4) ‖ group threshold (4)
//!   ‖ group count (4) ‖ member index (4) ‖ member threshold (4)
//!   ‖ padding ‖ share value (8·N) ‖ checksum (30)
//! ```
//!
//! All fields are big-endian. The padding is the zero bits needed to bring
//! the share value up to a multiple of 10 bits and sits in front of the
//! value. Share values have an even number of bytes, so on decode the
//! padding length is recovered as the value field length modulo 16.
//!
//! # Examples
//!
//! ```rust
//! use slip39::codec::{ShareMetadata, create_share, parse_share};
//! use slip39::domain::{Identifier, IterationExponent};
//! use slip39::{FieldVector, Wordlist};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let wordlist = Wordlist::new((0..1024).map(|i| format!("w{i}")))?;
//! let metadata = ShareMetadata {
//!     identifier: Identifier::new(12344)?,
//!     iteration_exponent: IterationExponent::new(2)?,
//!     group_index: 0,
//!     group_threshold: 3,
//!     group_count: 5,
//!     member_index: 1,
//!     member_threshold: 3,
//! };
//! let value = FieldVector::from_hex("a33456789a123456789a123456789a123456789a")?;
//!
//! let mnemonic = create_share(metadata, &value, &wordlist)?;
//! assert_eq!(mnemonic.as_str().split_whitespace().count(), 23);
//!
//! let share = parse_share(mnemonic.as_str(), &wordlist)?;
//! assert_eq!(*share.metadata(), metadata);
//! assert_eq!(*share.value(), value);
//! # Ok(())
//! # }
//! ```

use zeroize::Zeroizing;

use crate::checksum::{
    CHECKSUM_WORDS, CUSTOMIZATION_STRING, RADIX_BITS, create_checksum, verify_checksum,
};
use crate::domain::{Identifier, IterationExponent};
use crate::error::{Error, Result};
use crate::vector::FieldVector;
use crate::wordlist::{WORDLIST_SIZE, Wordlist};

/// Bits occupied by the metadata fields
pub const METADATA_BITS: u32 = 40;

/// Minimum share value length in bits
pub const MIN_SHARE_BITS: usize = 128;

/// Shortest valid mnemonic: metadata, a 128-bit value and the checksum
pub const MIN_MNEMONIC_WORDS: usize = (METADATA_BITS / RADIX_BITS) as usize
    + MIN_SHARE_BITS.div_ceil(RADIX_BITS as usize)
    + CHECKSUM_WORDS;

/// Width of each 4-bit metadata field
const NIBBLE_BITS: u32 = 4;

/// A validated SLIP-39 share mnemonic
///
/// Wraps the mnemonic in `Zeroizing` to ensure secure memory cleanup.
#[derive(Debug, Clone, PartialEq)]
pub struct Slip39Mnemonic(Zeroizing<String>);

impl Slip39Mnemonic {
    pub(crate) fn new_unchecked(s: String) -> Self {
        Self(Zeroizing::new(s))
    }

    /// Gets the mnemonic as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slip39Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &*self.0)
    }
}

/// Metadata carried by every share
///
/// The five small fields are raw 4-bit values (0..=15) and are packed as
/// given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareMetadata {
    pub identifier: Identifier,
    pub iteration_exponent: IterationExponent,
    pub group_index: u8,
    pub group_threshold: u8,
    pub group_count: u8,
    pub member_index: u8,
    pub member_threshold: u8,
}

impl ShareMetadata {
    fn nibbles(&self) -> [(&'static str, u8); 5] {
        [
            ("group_index", self.group_index),
            ("group_threshold", self.group_threshold),
            ("group_count", self.group_count),
            ("member_index", self.member_index),
            ("member_threshold", self.member_threshold),
        ]
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in self.nibbles() {
            if u32::from(value) >= 1 << NIBBLE_BITS {
                return Err(Error::out_of_range(
                    name,
                    format!("{name} is {value}, must fit in {NIBBLE_BITS} bits (0-15)"),
                ));
            }
        }
        Ok(())
    }
}

/// A share: metadata plus the share value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    metadata: ShareMetadata,
    value: FieldVector,
}

impl Share {
    /// Creates a share after validating metadata ranges and value length
    ///
    /// # Errors
    /// Returns an error if a 4-bit field is above 15, or the value is
    /// shorter than 128 bits or has an odd number of bytes
    pub fn new(metadata: ShareMetadata, value: FieldVector) -> Result<Self> {
        metadata.validate()?;
        if value.len() * 8 < MIN_SHARE_BITS {
            return Err(Error::invalid(
                "share_value",
                format!(
                    "share value must have at least {MIN_SHARE_BITS} bits, it has instead {} bits",
                    value.len() * 8
                ),
            ));
        }
        if value.len() % 2 != 0 {
            return Err(Error::invalid(
                "share_value",
                format!("share value must have an even number of bytes, got {}", value.len()),
            ));
        }
        Ok(Self { metadata, value })
    }

    #[must_use]
    pub fn metadata(&self) -> &ShareMetadata {
        &self.metadata
    }

    #[must_use]
    pub fn value(&self) -> &FieldVector {
        &self.value
    }

    /// Word indices of the mnemonic, checksum included
    #[must_use]
    pub fn to_indices(&self) -> Vec<u16> {
        let value_bits = 8 * self.value.len() as u32;
        let padding = (RADIX_BITS - value_bits % RADIX_BITS) % RADIX_BITS;

        let mut packer = WordPacker::default();
        packer.push(u32::from(*self.metadata.identifier), Identifier::BITS);
        packer.push(
            u32::from(*self.metadata.iteration_exponent),
            IterationExponent::BITS,
        );
        for (_, value) in self.metadata.nibbles() {
            packer.push(u32::from(value), NIBBLE_BITS);
        }
        packer.push(0, padding);
        for byte in self.value.as_bytes() {
            packer.push(u32::from(*byte), 8);
        }

        let mut indices = packer.finish();
        let checksum = create_checksum(CUSTOMIZATION_STRING, &indices);
        indices.extend_from_slice(&checksum);
        indices
    }

    /// Parses word indices, checksum included
    ///
    /// # Errors
    /// Returns [`Error::ChecksumMismatch`] if the checksum does not validate,
    /// or an error for a wrong length, an index above 1023 or non-zero
    /// padding
    pub fn from_indices(indices: &[u16]) -> Result<Self> {
        if indices.len() < MIN_MNEMONIC_WORDS {
            return Err(Error::invalid(
                "mnemonic",
                format!(
                    "mnemonic has {} words, must have at least {MIN_MNEMONIC_WORDS}",
                    indices.len()
                ),
            ));
        }
        if let Some(index) = indices.iter().find(|&&i| usize::from(i) >= WORDLIST_SIZE) {
            return Err(Error::out_of_range(
                "mnemonic",
                format!("word index {index} out of range (must be 0-1023)"),
            ));
        }
        if !verify_checksum(CUSTOMIZATION_STRING, indices) {
            return Err(Error::ChecksumMismatch);
        }

        let data = &indices[..indices.len() - CHECKSUM_WORDS];
        let value_field_bits = data.len() as u32 * RADIX_BITS - METADATA_BITS;
        let padding = value_field_bits % 16;
        if padding > 8 {
            return Err(Error::invalid(
                "mnemonic",
                format!("invalid mnemonic length: {} words", indices.len()),
            ));
        }

        let mut reader = WordReader::new(data);
        let identifier = Identifier::new(reader.read_u16(Identifier::BITS)?)?;
        let iteration_exponent =
            IterationExponent::new(reader.read_u8(IterationExponent::BITS)?)?;
        let metadata = ShareMetadata {
            identifier,
            iteration_exponent,
            group_index: reader.read_u8(NIBBLE_BITS)?,
            group_threshold: reader.read_u8(NIBBLE_BITS)?,
            group_count: reader.read_u8(NIBBLE_BITS)?,
            member_index: reader.read_u8(NIBBLE_BITS)?,
            member_threshold: reader.read_u8(NIBBLE_BITS)?,
        };

        if reader.read(padding)? != 0 {
            return Err(Error::invalid("mnemonic", "invalid mnemonic padding"));
        }

        let byte_count = ((value_field_bits - padding) / 8) as usize;
        let mut value = Zeroizing::new(Vec::with_capacity(byte_count));
        for _ in 0..byte_count {
            value.push(reader.read_u8(8)?);
        }

        Self::new(metadata, FieldVector::from_bytes(&value))
    }

    /// Mnemonic words, checksum included
    ///
    /// # Errors
    /// Returns an error if an index has no word in `wordlist`
    pub fn to_words<'w>(&self, wordlist: &'w Wordlist) -> Result<Vec<&'w str>> {
        self.to_indices()
            .into_iter()
            .map(|index| wordlist.word(index))
            .collect()
    }

    /// Renders the share as mnemonic text
    ///
    /// # Errors
    /// Returns an error if an index has no word in `wordlist`
    pub fn to_mnemonic(&self, wordlist: &Wordlist) -> Result<Slip39Mnemonic> {
        Ok(Slip39Mnemonic::new_unchecked(
            self.to_words(wordlist)?.join(" "),
        ))
    }

    /// Parses mnemonic text (whitespace separated, case-insensitive)
    ///
    /// # Errors
    /// Returns [`Error::MissingArgument`] for empty text,
    /// [`Error::UnknownWord`] for a word outside `wordlist`, and the errors
    /// of [`Share::from_indices`]
    pub fn from_mnemonic(mnemonic: &str, wordlist: &Wordlist) -> Result<Self> {
        let indices = mnemonic
            .split_whitespace()
            .map(|word| wordlist.index_of(word))
            .collect::<Result<Vec<_>>>()?;
        if indices.is_empty() {
            return Err(Error::MissingArgument("mnemonic"));
        }
        Self::from_indices(&indices)
    }
}

/// Encodes metadata and value as mnemonic text
///
/// # Errors
/// Returns an error if the metadata or value fail validation
pub fn create_share(
    metadata: ShareMetadata,
    value: &FieldVector,
    wordlist: &Wordlist,
) -> Result<Slip39Mnemonic> {
    Share::new(metadata, value.clone())?.to_mnemonic(wordlist)
}

/// Decodes mnemonic text into a share
///
/// # Errors
/// See [`Share::from_mnemonic`]
pub fn parse_share(mnemonic: &str, wordlist: &Wordlist) -> Result<Share> {
    Share::from_mnemonic(mnemonic, wordlist)
}

/// Accumulates bits MSB-first and emits 10-bit words
#[derive(Default)]
struct WordPacker {
    words: Vec<u16>,
    buffer: u16,
    bits_in_buffer: u32,
}

impl WordPacker {
    fn push(&mut self, value: u32, width: u32) {
        for bit_pos in (0..width).rev() {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "bit is guaranteed to be 0 or 1 from masking"
            )]
            let bit = ((value >> bit_pos) & 1) as u16;
            self.buffer = (self.buffer << 1) | bit;
            self.bits_in_buffer += 1;

            if self.bits_in_buffer == RADIX_BITS {
                self.words.push(self.buffer);
                self.buffer = 0;
                self.bits_in_buffer = 0;
            }
        }
    }

    fn finish(self) -> Vec<u16> {
        debug_assert_eq!(self.bits_in_buffer, 0, "bit string not word aligned");
        self.words
    }
}

/// Reads bits MSB-first from a sequence of 10-bit words
struct WordReader<'a> {
    words: &'a [u16],
    position: usize,
}

impl<'a> WordReader<'a> {
    fn new(words: &'a [u16]) -> Self {
        Self { words, position: 0 }
    }

    fn read(&mut self, width: u32) -> Result<u32> {
        let mut value = 0u32;
        for _ in 0..width {
            let radix = RADIX_BITS as usize;
            let word = self
                .words
                .get(self.position / radix)
                .ok_or_else(|| Error::invalid("mnemonic", "not enough bits"))?;
            let shift = radix - 1 - self.position % radix;
            value = (value << 1) | u32::from((word >> shift) & 1);
            self.position += 1;
        }
        Ok(value)
    }

    fn read_u8(&mut self, width: u32) -> Result<u8> {
        debug_assert!(width <= 8);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "at most 8 bits were read"
        )]
        let value = self.read(width)? as u8;
        Ok(value)
    }

    fn read_u16(&mut self, width: u32) -> Result<u16> {
        debug_assert!(width <= 16);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "at most 16 bits were read"
        )]
        let value = self.read(width)? as u16;
        Ok(value)
    }
}
