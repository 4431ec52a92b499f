//! Fixed-length vectors of GF(256) elements
//!
//! A [`FieldVector`] carries a secret, a share value or a digest. All
//! arithmetic is componentwise and requires operands of equal length.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::field::FieldElement;

/// An immutable sequence of field elements
///
/// The backing buffer is zeroed on drop. Equality compares length and
/// contents and never fails; vectors of different lengths are unequal.
/// `==` is not constant-time: do not use it to compare secrets or tags
/// where timing is observable. Digest checks go through
/// [`verify_digest`](crate::digest::verify_digest), which compares in
/// constant time.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FieldVector(Zeroizing<Vec<u8>>);

impl FieldVector {
    /// Creates a vector by copying raw bytes
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(Zeroizing::new(bytes.to_vec()))
    }

    /// Creates the zero vector of the given length
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self(Zeroizing::new(vec![0u8; len]))
    }

    /// Parses a hexadecimal string (even length, case-insensitive)
    ///
    /// # Errors
    /// Returns [`Error::Hex`] if the string is not valid hex
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = Zeroizing::new(hex::decode(hex_str.trim())?);
        Ok(Self::from_bytes(&bytes))
    }

    /// Draws a vector of `len` bytes from the thread-local CSPRNG
    #[must_use]
    pub fn random(len: usize) -> Self {
        Self::random_with_rng(len, &mut rand::thread_rng())
    }

    /// Draws a vector of `len` bytes from the given CSPRNG
    pub fn random_with_rng<R: RngCore + CryptoRng>(len: usize, rng: &mut R) -> Self {
        let mut bytes = Zeroizing::new(vec![0u8; len]);
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Number of elements
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the vector has no elements
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Byte view of the vector
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Element at `index`, if in bounds
    #[must_use]
    pub fn get(&self, index: usize) -> Option<FieldElement> {
        self.0.get(index).copied().map(FieldElement::new)
    }

    /// Iterates over the elements in order
    pub fn iter(&self) -> impl Iterator<Item = FieldElement> + '_ {
        self.0.iter().copied().map(FieldElement::new)
    }

    /// Lowercase hex encoding
    #[must_use]
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.as_bytes()))
    }

    /// Componentwise sum
    ///
    /// # Errors
    /// Returns an error if the lengths differ
    pub fn try_add(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, |a, b| Ok(a + b))
    }

    /// Componentwise difference (identical to the sum in GF(256))
    ///
    /// # Errors
    /// Returns an error if the lengths differ
    pub fn try_sub(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, |a, b| Ok(a - b))
    }

    /// Componentwise product
    ///
    /// # Errors
    /// Returns an error if the lengths differ
    pub fn try_mul(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, |a, b| Ok(a * b))
    }

    /// Componentwise quotient
    ///
    /// # Errors
    /// Returns an error if the lengths differ or any component of `rhs` is zero
    pub fn try_div(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, FieldElement::checked_div)
    }

    /// Multiplies every component by `scalar`
    #[must_use]
    pub fn scale(&self, scalar: FieldElement) -> Self {
        self.iter().map(|x| u8::from(scalar * x)).collect()
    }

    /// Concatenation `self ‖ tail`
    #[must_use]
    pub fn concat(&self, tail: &Self) -> Self {
        let mut bytes = Zeroizing::new(Vec::with_capacity(self.len() + tail.len()));
        bytes.extend_from_slice(self.as_bytes());
        bytes.extend_from_slice(tail.as_bytes());
        Self(bytes)
    }

    /// Splits into `[0, mid)` and `[mid, len)`
    ///
    /// # Errors
    /// Returns an error if `mid` exceeds the length
    pub fn split_at(&self, mid: usize) -> Result<(Self, Self)> {
        if mid > self.len() {
            return Err(Error::out_of_range(
                "mid",
                format!("{mid} exceeds vector length {}", self.len()),
            ));
        }
        let (head, tail) = self.as_bytes().split_at(mid);
        Ok((Self::from_bytes(head), Self::from_bytes(tail)))
    }

    fn zip_with(
        &self,
        rhs: &Self,
        op: impl Fn(FieldElement, FieldElement) -> Result<FieldElement>,
    ) -> Result<Self> {
        if self.len() != rhs.len() {
            return Err(Error::invalid(
                "rhs",
                format!("length mismatch: {} vs {}", self.len(), rhs.len()),
            ));
        }
        let bytes = self
            .iter()
            .zip(rhs.iter())
            .map(|(a, b)| op(a, b).map(u8::from))
            .collect::<Result<Vec<u8>>>()?;
        Ok(Self(Zeroizing::new(bytes)))
    }
}

impl From<Vec<u8>> for FieldVector {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Zeroizing::new(bytes))
    }
}

impl FromIterator<u8> for FieldVector {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self(Zeroizing::new(iter.into_iter().collect()))
    }
}

impl std::fmt::Debug for FieldVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FieldVector(<{} bytes>)", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_vector(s: &str) -> FieldVector {
        FieldVector::from_hex(s).unwrap()
    }

    #[test]
    fn test_equal_if_all_bytes_equal() {
        assert_eq!(hex_vector("123456789abcdeff"), hex_vector("123456789ABCDEFF"));
    }

    #[test]
    fn test_different_if_one_bit_differs() {
        assert_ne!(hex_vector("123456789abcdeff"), hex_vector("123456789abcdefe"));
    }

    #[test]
    fn test_different_lengths_are_unequal() {
        assert_ne!(hex_vector("123456789abcdeff"), hex_vector("123456789abcde"));
    }

    #[test]
    fn test_iter_yields_elements_in_order() {
        let vector = hex_vector("00a3ff");
        let elements: Vec<_> = vector.iter().collect();
        assert_eq!(
            elements,
            [FieldElement::new(0x00), FieldElement::new(0xa3), FieldElement::new(0xff)]
        );
        assert!(!vector.is_empty());
    }

    #[test]
    fn test_empty_vectors_are_equal() {
        assert_eq!(hex_vector(""), hex_vector(""));
        assert!(hex_vector("").is_empty());
    }

    #[test]
    fn test_odd_length_hex_rejected() {
        assert!(matches!(FieldVector::from_hex("abc"), Err(Error::Hex(_))));
        assert!(matches!(FieldVector::from_hex("zz"), Err(Error::Hex(_))));
    }

    #[test]
    fn test_hex_round_trip() {
        let vector = hex_vector("A33456789A");
        assert_eq!(vector.to_hex().as_str(), "a33456789a");
        assert_eq!(vector.len(), 5);
        assert_eq!(vector.get(0), Some(FieldElement::new(0xa3)));
        assert_eq!(vector.get(5), None);
    }

    #[test]
    fn test_componentwise_arithmetic() {
        let a = hex_vector("0b23");
        let b = hex_vector("1624");

        assert_eq!(a.try_add(&b).unwrap(), hex_vector("1d07"));
        assert_eq!(a.try_sub(&b).unwrap(), a.try_add(&b).unwrap());

        // 0x23 * 0x24 = 0x80
        let product = a.try_mul(&b).unwrap();
        assert_eq!(product.get(1), Some(FieldElement::new(0x80)));
        assert_eq!(product.try_div(&b).unwrap(), a);
    }

    #[test]
    fn test_length_mismatch_is_an_error() {
        let a = hex_vector("0102");
        let b = hex_vector("010203");
        assert!(matches!(a.try_add(&b), Err(Error::InvalidArgument { .. })));
        assert!(matches!(a.try_mul(&b), Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn test_division_by_zero_component() {
        let a = hex_vector("0102");
        let b = hex_vector("0100");
        assert!(matches!(a.try_div(&b), Err(Error::DivisionByZero)));
    }

    #[test]
    fn test_scale() {
        let vector = hex_vector("0123");
        assert_eq!(vector.scale(FieldElement::ONE), vector);
        assert_eq!(vector.scale(FieldElement::ZERO), FieldVector::zeros(2));
    }

    #[test]
    fn test_split_and_concat() {
        let vector = hex_vector("00112233");
        let (head, tail) = vector.split_at(1).unwrap();
        assert_eq!(head, hex_vector("00"));
        assert_eq!(tail, hex_vector("112233"));
        assert_eq!(head.concat(&tail), vector);
        assert!(vector.split_at(5).is_err());
    }

    #[test]
    fn test_random_has_requested_length() {
        assert_eq!(FieldVector::random(32).len(), 32);
    }

    #[test]
    fn test_debug_redacts_contents() {
        let vector = hex_vector("deadbeef");
        assert_eq!(format!("{vector:?}"), "FieldVector(<4 bytes>)");
    }
}
