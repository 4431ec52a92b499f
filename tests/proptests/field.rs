//! Property tests for GF(256) arithmetic

use quickcheck_macros::quickcheck;
use slip39::FieldElement;

#[quickcheck]
fn prop_addition_is_its_own_inverse(a: u8, b: u8) -> bool {
    let (a, b) = (FieldElement::new(a), FieldElement::new(b));
    a + b - b == a && a + a == FieldElement::ZERO
}

#[quickcheck]
fn prop_multiplication_commutes(a: u8, b: u8) -> bool {
    let (a, b) = (FieldElement::new(a), FieldElement::new(b));
    a * b == b * a
}

#[quickcheck]
fn prop_multiplication_distributes(a: u8, b: u8, c: u8) -> bool {
    let (a, b, c) = (FieldElement::new(a), FieldElement::new(b), FieldElement::new(c));
    a * (b + c) == a * b + a * c
}

#[quickcheck]
fn prop_division_inverts_multiplication(a: u8, b: u8) -> bool {
    let (a, b) = (FieldElement::new(a), FieldElement::new(b));
    if b.is_zero() {
        return a.checked_div(b).is_err();
    }
    (a * b).checked_div(b).is_ok_and(|quotient| quotient == a)
}
