//! Arithmetic over GF(256)
//!
//! Elements are bytes interpreted as polynomials over GF(2) reduced modulo
//! x⁸ + x⁴ + x³ + x + 1 (`0x11B`, the AES polynomial).
//!
//! Addition and subtraction are XOR, negation is the identity. Multiplication
//! and division go through log/antilog tables built at compile time from the
//! generator `0x03`.

use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{Error, Result};

/// Low byte of the reduction polynomial (the x⁸ term is implicit)
const REDUCTION: u8 = 0x1B;

/// Generator of the multiplicative group used to build the tables
const GENERATOR: u8 = 0x03;

struct Tables {
    /// `exp[i] = g^i`, doubled so that `log a + log b` never needs a modulo
    exp: [u8; 510],
    /// `log[g^i] = i`; `log[0]` is unused
    log: [u8; 256],
}

static TABLES: Tables = build_tables();

/// Carry-less multiply with reduction, used only to build the tables
const fn mul_reduce(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        let carry = a & 0x80;
        a <<= 1;
        if carry != 0 {
            a ^= REDUCTION;
        }
        b >>= 1;
    }
    product
}

const fn build_tables() -> Tables {
    let mut exp = [0u8; 510];
    let mut log = [0u8; 256];

    let mut x = 1u8;
    let mut i = 0;
    while i < 255 {
        exp[i] = x;
        log[x as usize] = i as u8;
        x = mul_reduce(x, GENERATOR);
        i += 1;
    }
    while i < 510 {
        exp[i] = exp[i - 255];
        i += 1;
    }

    Tables { exp, log }
}

/// An element of GF(256)
///
/// Immutable value type; every operation returns a new element. The
/// default value is the additive identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldElement(u8);

impl FieldElement {
    /// Additive identity
    pub const ZERO: Self = Self(0);

    /// Multiplicative identity
    pub const ONE: Self = Self(1);

    /// Wraps a byte as a field element
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the byte representation
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns true for the additive identity
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Multiplicative inverse
    ///
    /// # Errors
    /// Returns [`Error::DivisionByZero`] for the additive identity
    pub fn inverse(self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let log = TABLES.log[self.0 as usize] as usize;
        Ok(Self(TABLES.exp[255 - log]))
    }

    /// Field division `self / rhs`
    ///
    /// # Errors
    /// Returns [`Error::DivisionByZero`] when `rhs` is zero
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(Self::ZERO);
        }
        let log_a = TABLES.log[self.0 as usize] as usize;
        let log_b = TABLES.log[rhs.0 as usize] as usize;
        Ok(Self(TABLES.exp[log_a + 255 - log_b]))
    }
}

impl From<u8> for FieldElement {
    #[inline]
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<FieldElement> for u8 {
    #[inline]
    fn from(element: FieldElement) -> Self {
        element.0
    }
}

impl Add for FieldElement {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl Sub for FieldElement {
    type Output = Self;

    // Characteristic 2: subtraction is addition
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl Neg for FieldElement {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self
    }
}

impl Mul for FieldElement {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::ZERO;
        }
        let log_a = TABLES.log[self.0 as usize] as usize;
        let log_b = TABLES.log[rhs.0 as usize] as usize;
        Self(TABLES.exp[log_a + log_b])
    }
}
